use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{RectF, Vec2f};

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// Facility type the map can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    LectureHalls,
    DeansOffice,
    Libraries,
    Parking,
}

impl Category {
    /// All categories in button order.
    pub const ALL: [Category; 4] = [
        Category::LectureHalls,
        Category::DeansOffice,
        Category::Libraries,
        Category::Parking,
    ];

    /// Position inside [`Category::ALL`]. Per-category tables are indexed with this.
    pub const fn index(self) -> usize {
        match self {
            Category::LectureHalls => 0,
            Category::DeansOffice => 1,
            Category::Libraries => 2,
            Category::Parking => 3,
        }
    }

    /// Stable identifier, identical to the serde representation.
    pub const fn id(self) -> &'static str {
        match self {
            Category::LectureHalls => "LectureHalls",
            Category::DeansOffice => "DeansOffice",
            Category::Libraries => "Libraries",
            Category::Parking => "Parking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Accepts the stable id (`LectureHalls`) as well as kebab or snake case
    /// (`lecture-halls`, `deans_office`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '\''))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match norm.as_str() {
            "lecturehalls" | "lecturehall" | "halls" => Ok(Category::LectureHalls),
            "deansoffice" | "dean" => Ok(Category::DeansOffice),
            "libraries" | "library" => Ok(Category::Libraries),
            "parking" => Ok(Category::Parking),
            _ => anyhow::bail!("Unknown category '{}'", s),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pins
// ────────────────────────────────────────────────────────────────────────────

/// Identifies a pin by its owning category and its index in that category's
/// ordered pin sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId {
    pub category: Category,
    pub index: usize,
}

impl PinId {
    pub fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }
}

/// A fixed map annotation for one facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Display text, either a short code ("H1") or a full name.
    pub label: String,
    /// Symbolic icon name. When present the marker shows the icon instead of the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Signed distance from the map center.
    pub offset: Vec2f,
    pub category: Category,
}

/// What a pin marker draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinContent<'a> {
    Icon(&'a str),
    Text(&'a str),
}

impl Pin {
    pub fn new(category: Category, label: &str, icon: Option<&str>, x: f32, y: f32) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.map(str::to_string),
            offset: Vec2f::new(x, y),
            category,
        }
    }

    pub fn content(&self) -> PinContent<'_> {
        match self.icon.as_deref() {
            Some(icon) => PinContent::Icon(icon),
            None => PinContent::Text(&self.label),
        }
    }
}

/// The currently selected pin: its offset and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPin {
    pub offset: Vec2f,
    pub label: String,
}

impl SelectedPin {
    /// Whether this selection was taken from `pin`.
    pub fn matches(&self, pin: &Pin) -> bool {
        self.offset == pin.offset && self.label == pin.label
    }
}

impl From<&Pin> for SelectedPin {
    fn from(pin: &Pin) -> Self {
        Self {
            offset: pin.offset,
            label: pin.label.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Viewport
// ────────────────────────────────────────────────────────────────────────────

/// The rendered map container. Pin offsets are relative to its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left corner in screen coordinates.
    #[serde(default)]
    pub origin: Vec2f,
    pub size: Vec2f,
}

impl Viewport {
    pub fn new(origin: Vec2f, size: Vec2f) -> Self {
        Self { origin, size }
    }

    /// Viewport anchored at the screen origin.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(Vec2f::ZERO, Vec2f::new(width, height))
    }

    pub fn center(&self) -> Vec2f {
        Vec2f::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    pub fn rect(&self) -> RectF {
        RectF::from_min_size(self.origin, self.size)
    }

    /// Convert a center-relative offset to an absolute screen position.
    pub fn to_screen(&self, offset: Vec2f) -> Vec2f {
        self.center().add(offset)
    }
}

impl Default for Viewport {
    /// Portrait phone-sized map area.
    fn default() -> Self {
        Self::with_size(390.0, 700.0)
    }
}
