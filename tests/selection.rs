use campusmap::geometry::Vec2f;
use campusmap::model::{Category, SelectedPin};
use campusmap::registry::pins_for;
use campusmap::selection::PinSelection;

#[test]
fn select_then_clear() {
    let mut sel = PinSelection::new();
    let h1 = &pins_for(Some(Category::LectureHalls))[0];
    let picked = sel.select(h1).clone();
    assert_eq!(
        picked,
        SelectedPin {
            offset: Vec2f::new(40.0, 80.0),
            label: "H1".into()
        }
    );
    sel.clear();
    assert!(sel.selected().is_none());
}

#[test]
fn reselecting_is_idempotent() {
    let mut sel = PinSelection::new();
    let h2 = &pins_for(Some(Category::LectureHalls))[1];
    sel.select(h2);
    sel.select(h2);
    assert_eq!(sel.selected().map(|s| s.label.as_str()), Some("H2"));
}

#[test]
fn selecting_another_pin_replaces() {
    let mut sel = PinSelection::new();
    let pins = pins_for(Some(Category::Libraries));
    sel.select(&pins[0]);
    sel.select(&pins[1]);
    assert_eq!(sel.selected().map(|s| s.label.as_str()), Some("Library 2"));
}

#[test]
fn retain_drops_selection_missing_from_category() {
    let mut sel = PinSelection::new();
    let dean = &pins_for(Some(Category::DeansOffice))[0];
    sel.select(dean);
    assert!(!sel.retain_for(Some(Category::DeansOffice)));
    assert!(sel.selected().is_some());
    assert!(sel.retain_for(Some(Category::Parking)));
    assert!(sel.is_empty());
    // nothing left to drop
    assert!(!sel.retain_for(None));
}
