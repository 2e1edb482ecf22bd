//! Plain 2D value types shared by the map engine.
//!
//! All coordinates live in one logical screen space (points, y grows
//! downwards). They are deliberately independent of egui so the engine can be
//! used and tested without the `egui` feature.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const ZERO: Vec2f = Vec2f { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2f) -> Vec2f {
        Vec2f::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2f) -> Vec2f {
        Vec2f::new(self.x - other.x, self.y - other.y)
    }

    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub min: Vec2f,
    pub max: Vec2f,
}

impl RectF {
    pub fn from_min_max(min: Vec2f, max: Vec2f) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2f, size: Vec2f) -> Self {
        Self {
            min,
            max: min.add(size),
        }
    }

    pub fn from_center_size(center: Vec2f, size: Vec2f) -> Self {
        let half = Vec2f::new(size.x * 0.5, size.y * 0.5);
        Self {
            min: center.sub(half),
            max: center.add(half),
        }
    }

    pub fn center(&self) -> Vec2f {
        Vec2f::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive on all edges.
    pub fn contains(&self, p: Vec2f) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: RectF) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn intersects(&self, other: RectF) -> bool {
        !(self.max.x <= other.min.x
            || other.max.x <= self.min.x
            || self.max.y <= other.min.y
            || other.max.y <= self.min.y)
    }

    /// Shrink by `margin` on every side. A margin larger than half the
    /// extent collapses that axis onto the center line.
    pub fn shrink(&self, margin: f32) -> RectF {
        let c = self.center();
        let hw = (self.width() * 0.5 - margin).max(0.0);
        let hh = (self.height() * 0.5 - margin).max(0.0);
        RectF::from_min_max(Vec2f::new(c.x - hw, c.y - hh), Vec2f::new(c.x + hw, c.y + hh))
    }
}

/// Circular hit area, used for pin markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2f,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2f, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, p: Vec2f) -> bool {
        p.sub(self.center).length_sq() <= self.radius * self.radius
    }

    pub fn bounding_rect(&self) -> RectF {
        let d = self.radius * 2.0;
        RectF::from_center_size(self.center, Vec2f::new(d, d))
    }
}
