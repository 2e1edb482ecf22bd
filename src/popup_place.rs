//! Placement of the info popup above the selected pin.
//!
//! The popup is anchored at the pin's screen position lifted by
//! `vertical_lift`, so it floats above the marker instead of covering it.
//! With clamping enabled the popup rectangle is then slid back inside the
//! viewport, keeping `edge_margin` free on every side:
//! - on an axis where the popup fits, its center is clamped into the allowed range
//! - on an axis where it does not fit, it is centered in the viewport
//!
//! Placement is pure and deterministic.

use serde::Serialize;

use crate::config::MapConfig;
use crate::geometry::{RectF, Vec2f};
use crate::model::{SelectedPin, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupPlacement {
    /// `center + (offset.x, offset.y - vertical_lift)`, before clamping.
    pub anchor: Vec2f,
    /// Final popup rectangle.
    pub rect: RectF,
    /// Whether clamping moved the popup away from the anchor.
    pub clamped: bool,
}

impl PopupPlacement {
    /// Center of the final rectangle.
    pub fn position(&self) -> Vec2f {
        self.rect.center()
    }
}

/// Unclamped popup anchor for a center-relative pin offset.
pub fn popup_anchor(offset: Vec2f, viewport: &Viewport, vertical_lift: f32) -> Vec2f {
    let c = viewport.center();
    Vec2f::new(c.x + offset.x, c.y + offset.y - vertical_lift)
}

fn clamp_axis(center: f32, half: f32, lo: f32, hi: f32) -> f32 {
    let min_c = lo + half;
    let max_c = hi - half;
    if min_c <= max_c {
        center.clamp(min_c, max_c)
    } else {
        // Popup wider than the allowed span: collapse onto the span's middle
        (lo + hi) * 0.5
    }
}

/// Place the popup for `selected` inside `viewport`.
pub fn place_popup(selected: &SelectedPin, viewport: &Viewport, cfg: &MapConfig) -> PopupPlacement {
    let anchor = popup_anchor(selected.offset, viewport, cfg.vertical_lift);
    let size = cfg.popup_size;
    if !cfg.clamp_popup {
        return PopupPlacement {
            anchor,
            rect: RectF::from_center_size(anchor, size),
            clamped: false,
        };
    }
    let bounds = viewport.rect().shrink(cfg.edge_margin.max(0.0));
    let cx = clamp_axis(anchor.x, size.x * 0.5, bounds.min.x, bounds.max.x);
    let cy = clamp_axis(anchor.y, size.y * 0.5, bounds.min.y, bounds.max.y);
    let center = Vec2f::new(cx, cy);
    PopupPlacement {
        anchor,
        rect: RectF::from_center_size(center, size),
        clamped: center != anchor,
    }
}
