//! Static, category-keyed registry of map pins and per-category presentation
//! data (button icon/title, popup thumbnail).
//!
//! The registry is read-only at runtime. Lookups for `None` return empty
//! results, never errors.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::geometry::Vec2f;
use crate::model::{Category, Pin, PinId};

/// Button shown in the horizontal category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub category: Category,
    /// Symbolic icon name.
    pub icon: &'static str,
    pub title: &'static str,
}

const CATEGORY_BUTTONS: [CategoryButton; 4] = [
    CategoryButton {
        category: Category::LectureHalls,
        icon: "building.2",
        title: "Lec Halls",
    },
    CategoryButton {
        category: Category::DeansOffice,
        icon: "person.fill",
        title: "Dean's Office",
    },
    CategoryButton {
        category: Category::Libraries,
        icon: "book.fill",
        title: "Library",
    },
    CategoryButton {
        category: Category::Parking,
        icon: "p.circle.fill",
        title: "Parking",
    },
];

/// Thumbnail asset names, indexed by [`Category::index`].
const THUMBNAILS: [&str; 4] = ["LecHall", "DeansOffice", "Libraries", "ParkingImg"];
const FALLBACK_THUMBNAIL: &str = "LecHall";

/// Decorative "you are here" dot, relative to the map center.
const CURRENT_LOCATION: Vec2f = Vec2f::new(0.0, -30.0);

fn default_registry() -> IndexMap<Category, Vec<Pin>> {
    use Category::*;
    let mut m = IndexMap::new();
    m.insert(
        LectureHalls,
        vec![
            Pin::new(LectureHalls, "H1", None, 40.0, 80.0),
            Pin::new(LectureHalls, "H2", None, -90.0, -120.0),
            Pin::new(LectureHalls, "H3", None, -65.0, 50.0),
            Pin::new(LectureHalls, "H4", None, 80.0, -175.0),
        ],
    );
    m.insert(
        DeansOffice,
        vec![Pin::new(DeansOffice, "Dean's Office", Some("person.fill"), 15.0, -145.0)],
    );
    m.insert(
        Libraries,
        vec![
            Pin::new(Libraries, "Library 1", Some("book.fill"), 70.0, -10.0),
            Pin::new(Libraries, "Library 2", Some("book.fill"), -90.0, -260.0),
        ],
    );
    m.insert(
        Parking,
        vec![Pin::new(Parking, "Parking", Some("p.circle.fill"), 120.0, 115.0)],
    );
    m
}

static REGISTRY: Lazy<IndexMap<Category, Vec<Pin>>> = Lazy::new(default_registry);

/// Ordered pins of `category`; empty for `None`.
pub fn pins_for(category: Option<Category>) -> &'static [Pin] {
    category
        .and_then(|c| REGISTRY.get(&c))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Look up a single pin by id.
pub fn pin(id: PinId) -> Option<&'static Pin> {
    REGISTRY.get(&id.category)?.get(id.index)
}

/// Every registered pin with its id, in category order.
pub fn all_pins() -> impl Iterator<Item = (PinId, &'static Pin)> {
    REGISTRY.iter().flat_map(|(cat, pins)| {
        pins.iter()
            .enumerate()
            .map(move |(i, p)| (PinId::new(*cat, i), p))
    })
}

pub fn category_buttons() -> &'static [CategoryButton] {
    &CATEGORY_BUTTONS
}

/// Asset name of the popup thumbnail for a category.
pub fn thumbnail_for(category: Option<Category>) -> &'static str {
    category
        .map(|c| THUMBNAILS[c.index()])
        .unwrap_or(FALLBACK_THUMBNAIL)
}

pub fn current_location_offset() -> Vec2f {
    CURRENT_LOCATION
}
