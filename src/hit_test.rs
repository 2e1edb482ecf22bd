//! Pin layout and tap hit testing.
//!
//! Markers are laid out in registry order, so the last marker is drawn on top.
//! Hit testing walks the markers back to front; when two hit areas overlap the
//! topmost one wins.

use serde::Serialize;

use crate::config::MapConfig;
use crate::geometry::{Circle, RectF, Vec2f};
use crate::model::{Category, Pin, PinContent, PinId, Viewport};
use crate::registry;

/// A visible, tappable pin placed on the map surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinMarker {
    pub id: PinId,
    pub pin: &'static Pin,
    /// Absolute screen position of the pin.
    pub position: Vec2f,
    pub hit: Circle,
}

impl PinMarker {
    pub fn content(&self) -> PinContent<'static> {
        self.pin.content()
    }
}

/// What a tap at a given point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    Pin(PinId),
    /// The popup card of the selected pin. It sits above the pins.
    Popup,
    /// Inside the map but on no pin.
    Background,
    /// Outside the map surface.
    Outside,
}

/// Lay out the pins of the active category. `None` renders nothing.
pub fn render_pins(active: Option<Category>, viewport: &Viewport, cfg: &MapConfig) -> Vec<PinMarker> {
    let Some(category) = active else {
        return Vec::new();
    };
    let radius = cfg.effective_hit_diameter() * 0.5;
    registry::pins_for(active)
        .iter()
        .enumerate()
        .map(|(i, pin)| {
            let position = viewport.to_screen(pin.offset);
            PinMarker {
                id: PinId::new(category, i),
                pin,
                position,
                hit: Circle::new(position, radius),
            }
        })
        .collect()
}

/// Topmost marker whose hit area contains `point`.
pub fn hit_test(markers: &[PinMarker], point: Vec2f) -> Option<&PinMarker> {
    markers.iter().rev().find(|m| m.hit.contains(point))
}

/// Classify a tap against the map surface, the open popup (if any) and the
/// rendered markers, in that order.
pub fn classify_tap(
    markers: &[PinMarker],
    viewport: &Viewport,
    popup: Option<RectF>,
    point: Vec2f,
) -> TapTarget {
    if !viewport.rect().contains(point) {
        return TapTarget::Outside;
    }
    if popup.is_some_and(|r| r.contains(point)) {
        return TapTarget::Popup;
    }
    if let Some(m) = hit_test(markers, point) {
        tracing::trace!(pin = %m.pin.label, x = point.x, y = point.y, "tap hit pin");
        return TapTarget::Pin(m.id);
    }
    TapTarget::Background
}
