//! Selection state for the map: at most one selected pin.
//!
//! # Usage
//!
//! ```rust
//! use campusmap::model::Category;
//! use campusmap::registry::pins_for;
//! use campusmap::selection::PinSelection;
//!
//! let mut sel = PinSelection::new();
//! let h1 = &pins_for(Some(Category::LectureHalls))[0];
//! sel.select(h1);
//! assert_eq!(sel.selected().map(|p| p.label.as_str()), Some("H1"));
//! sel.clear();
//! assert!(sel.is_empty());
//! ```

use crate::model::{Category, Pin, SelectedPin};
use crate::registry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinSelection {
    selected: Option<SelectedPin>,
}

impl PinSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedPin> {
        self.selected.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Select `pin`. Re-selecting the same pin keeps it selected.
    pub fn select(&mut self, pin: &Pin) -> &SelectedPin {
        self.selected.insert(SelectedPin::from(pin))
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Keep the selection only if a pin of `category` has the same offset and
    /// label. Returns true when the selection was dropped.
    pub fn retain_for(&mut self, category: Option<Category>) -> bool {
        let Some(sel) = &self.selected else {
            return false;
        };
        let still_visible = registry::pins_for(category).iter().any(|p| sel.matches(p));
        if !still_visible {
            self.selected = None;
        }
        !still_visible
    }
}
