#![cfg(feature = "egui")]

use eframe::egui::{Pos2, Rect};

use crate::geometry::{RectF, Vec2f};
use crate::model::Viewport;

pub fn to_pos2(v: Vec2f) -> Pos2 {
    Pos2::new(v.x, v.y)
}

pub fn to_vec2f(p: Pos2) -> Vec2f {
    Vec2f::new(p.x, p.y)
}

pub fn to_rect(r: RectF) -> Rect {
    Rect::from_min_max(to_pos2(r.min), to_pos2(r.max))
}

/// Map surface allocated by egui, as an engine viewport.
pub fn viewport_from_rect(r: Rect) -> Viewport {
    Viewport::new(to_vec2f(r.min), Vec2f::new(r.width(), r.height()))
}
