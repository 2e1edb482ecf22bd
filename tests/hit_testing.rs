use campusmap::config::{MapConfig, MIN_PIN_HIT_DIAMETER};
use campusmap::geometry::{Circle, RectF, Vec2f};
use campusmap::hit_test::{classify_tap, hit_test, render_pins, TapTarget};
use campusmap::model::{Category, PinId, Viewport};

fn viewport() -> Viewport {
    Viewport::with_size(390.0, 700.0)
}

#[test]
fn markers_are_placed_relative_to_center() {
    let vp = Viewport::new(Vec2f::new(10.0, 50.0), Vec2f::new(400.0, 600.0));
    let markers = render_pins(Some(Category::LectureHalls), &vp, &MapConfig::default());
    assert_eq!(markers.len(), 4);
    // center is (210, 350)
    assert_eq!(markers[0].position, Vec2f::new(250.0, 430.0));
    assert_eq!(markers[3].position, Vec2f::new(290.0, 175.0));
    assert_eq!(markers[2].id, PinId::new(Category::LectureHalls, 2));
}

#[test]
fn nothing_rendered_without_category() {
    assert!(render_pins(None, &viewport(), &MapConfig::default()).is_empty());
}

#[test]
fn hit_area_respects_minimum() {
    let cfg = MapConfig {
        pin_hit_diameter: 10.0,
        ..Default::default()
    };
    let markers = render_pins(Some(Category::Parking), &viewport(), &cfg);
    assert_eq!(markers[0].hit.radius * 2.0, MIN_PIN_HIT_DIAMETER);
}

#[test]
fn tap_on_pin_and_background() {
    let vp = viewport();
    let markers = render_pins(Some(Category::LectureHalls), &vp, &MapConfig::default());
    // H1 at (235, 430)
    let hit = hit_test(&markers, Vec2f::new(238.0, 426.0)).unwrap();
    assert_eq!(hit.pin.label, "H1");
    assert_eq!(
        classify_tap(&markers, &vp, None, Vec2f::new(10.0, 10.0)),
        TapTarget::Background
    );
    assert_eq!(
        classify_tap(&markers, &vp, None, Vec2f::new(-5.0, 10.0)),
        TapTarget::Outside
    );
}

#[test]
fn overlapping_hit_areas_pick_topmost() {
    let cfg = MapConfig {
        pin_hit_diameter: 400.0,
        ..Default::default()
    };
    let vp = viewport();
    let markers = render_pins(Some(Category::LectureHalls), &vp, &cfg);
    // Every pin covers the center; H4 is drawn last
    let hit = hit_test(&markers, vp.center()).unwrap();
    assert_eq!(hit.pin.label, "H4");
}

#[test]
fn circle_edges_are_inclusive() {
    let c = Circle::new(Vec2f::new(0.0, 0.0), 12.0);
    assert!(c.contains(Vec2f::new(12.0, 0.0)));
    assert!(!c.contains(Vec2f::new(9.0, 9.0)));
}

#[test]
fn pin_circle_past_the_map_edge_is_outside() {
    let cfg = MapConfig {
        pin_hit_diameter: 400.0,
        ..Default::default()
    };
    let vp = viewport();
    let markers = render_pins(Some(Category::Parking), &vp, &cfg);
    // Parking sits at (315, 465); its circle reaches beyond x = 390
    let point = Vec2f::new(395.0, 465.0);
    assert!(markers[0].hit.contains(point));
    assert_eq!(classify_tap(&markers, &vp, None, point), TapTarget::Outside);
}

#[test]
fn popup_covers_pins_below_it() {
    let vp = viewport();
    let markers = render_pins(Some(Category::LectureHalls), &vp, &MapConfig::default());
    let card = RectF::from_min_max(Vec2f::new(8.0, 260.0), Vec2f::new(288.0, 420.0));
    // inside both the card and H1's hit circle
    let point = Vec2f::new(235.0, 418.0);
    assert!(hit_test(&markers, point).is_some());
    assert_eq!(classify_tap(&markers, &vp, Some(card), point), TapTarget::Popup);
    assert_eq!(
        classify_tap(&markers, &vp, Some(card), Vec2f::new(20.0, 650.0)),
        TapTarget::Background
    );
}
