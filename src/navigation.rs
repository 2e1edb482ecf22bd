//! Routing from a map category to its facility detail screen.
//!
//! The route table is indexed by [`Category::index`], so every category has
//! exactly one entry. `None` routes to the "details not available" placeholder.

use serde::Serialize;

use crate::config::MapConfig;
use crate::facility::FacilityDetail;
use crate::model::Category;

/// Detail screens reachable from the map popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DetailScreen {
    LectureHall,
    DeansOffice,
    Library,
    Parking,
}

const ROUTES: [DetailScreen; 4] = [
    DetailScreen::LectureHall,
    DetailScreen::DeansOffice,
    DetailScreen::Library,
    DetailScreen::Parking,
];

pub const UNAVAILABLE_MESSAGE: &str = "Details not available";

/// Where the popup's forward action leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Destination {
    Facility {
        screen: DetailScreen,
        category: Category,
        /// Display name of the facility (the selected pin's label).
        name: String,
    },
    Unavailable { message: &'static str },
}

impl Destination {
    /// Fresh detail-screen state for this destination, if it has content.
    pub fn open(&self, cfg: &MapConfig) -> Option<FacilityDetail> {
        match self {
            Destination::Facility { category, name, .. } => {
                Some(FacilityDetail::open(*category, name.clone(), cfg))
            }
            Destination::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Destination::Facility { .. })
    }
}

pub fn screen_for(category: Category) -> DetailScreen {
    ROUTES[category.index()]
}

pub fn destination_for(category: Option<Category>, label: &str) -> Destination {
    let dest = match category {
        Some(category) => Destination::Facility {
            screen: screen_for(category),
            category,
            name: label.to_string(),
        },
        None => Destination::Unavailable {
            message: UNAVAILABLE_MESSAGE,
        },
    };
    tracing::debug!(?category, label, ?dest, "resolved detail destination");
    dest
}
