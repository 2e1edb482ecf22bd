#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::hit_test::PinMarker;
use crate::model::{PinContent, Viewport};
use crate::registry;

use super::geometry::to_pos2;

pub(crate) const PIN_BLUE: Color32 = Color32::from_rgb(0, 122, 255);
const MAP_GROUND: Color32 = Color32::from_rgb(226, 236, 222);
const MAP_PATH: Color32 = Color32::from_rgb(250, 250, 245);

/// Glyph drawn for a symbolic icon name. Unknown names fall back to their
/// first letter.
pub fn icon_glyph(symbol: &str) -> String {
    let g = match symbol {
        "building.2" => "🏢",
        "person.fill" => "👤",
        "book.fill" => "📖",
        "p.circle.fill" => "🅿",
        _ => {
            return symbol
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default();
        }
    };
    g.to_string()
}

/// Stand-in for the campus map image: ground, a few walkways, and the
/// current-location dot.
pub(crate) fn paint_map_surface(painter: &egui::Painter, viewport: &Viewport) {
    let rect = Rect::from_min_size(
        to_pos2(viewport.origin),
        Vec2::new(viewport.size.x, viewport.size.y),
    );
    painter.rect_filled(rect, 0.0, MAP_GROUND);
    let path = Stroke::new(10.0, MAP_PATH);
    let c = rect.center();
    painter.line_segment([Pos2::new(rect.left(), c.y), Pos2::new(rect.right(), c.y)], path);
    painter.line_segment([Pos2::new(c.x, rect.top()), Pos2::new(c.x, rect.bottom())], path);
    painter.line_segment(
        [Pos2::new(rect.left(), rect.bottom()), Pos2::new(rect.right(), rect.top())],
        Stroke::new(6.0, MAP_PATH),
    );

    let here = to_pos2(viewport.to_screen(registry::current_location_offset()));
    painter.circle_filled(here, 6.0, PIN_BLUE);
    painter.circle_stroke(here, 6.0, Stroke::new(2.0, Color32::WHITE));
}

/// Draw one pin: a rounded badge with icon or label, and a small pointer
/// below it.
pub(crate) fn paint_pin(painter: &egui::Painter, marker: &PinMarker, selected: bool) {
    let center = to_pos2(marker.position);
    let (text, font) = match marker.content() {
        PinContent::Icon(symbol) => (icon_glyph(symbol), FontId::proportional(14.0)),
        PinContent::Text(label) => (label.to_string(), FontId::proportional(12.0)),
    };
    let galley = painter.layout_no_wrap(text, font, Color32::WHITE);
    let d = marker.hit.radius * 2.0;
    let size = Vec2::new((galley.size().x + 12.0).max(d), d);
    let badge = Rect::from_center_size(center, size);
    let fill = if selected {
        Color32::from_rgb(0, 90, 200)
    } else {
        PIN_BLUE
    };
    painter.rect_filled(badge, 12.0, fill);
    if selected {
        painter.rect_stroke(badge, 12.0, Stroke::new(2.0, Color32::WHITE), egui::StrokeKind::Inside);
    }
    let tip = Pos2::new(center.x, badge.bottom() + 8.0);
    painter.add(egui::Shape::convex_polygon(
        vec![
            Pos2::new(center.x - 5.0, badge.bottom()),
            Pos2::new(center.x + 5.0, badge.bottom()),
            tip,
        ],
        fill,
        Stroke::NONE,
    ));
    painter.galley(center - galley.size() * 0.5, galley, Color32::WHITE);
}

pub(crate) fn paint_popup_card(painter: &egui::Painter, rect: Rect, thumbnail: &str) {
    painter.rect_filled(rect.expand(2.0), 12.0, Color32::from_black_alpha(40));
    painter.rect_filled(rect, 12.0, Color32::WHITE);
    let thumb = Rect::from_min_size(rect.min, Vec2::new(rect.width(), rect.height() * 0.45));
    painter.rect_filled(thumb, 12.0, Color32::from_rgb(200, 214, 230));
    painter.text(
        thumb.center(),
        Align2::CENTER_CENTER,
        thumbnail,
        FontId::proportional(12.0),
        Color32::from_gray(90),
    );
}

pub(crate) fn status_color(available: bool) -> Color32 {
    if available {
        Color32::from_rgb(52, 199, 89)
    } else {
        Color32::from_rgb(255, 59, 48)
    }
}
