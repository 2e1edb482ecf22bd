//! Single-choice category filter.

use crate::model::Category;

/// Tracks the one active category, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelector {
    active: Option<Category>,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Category> {
        self.active
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active == Some(category)
    }

    /// Tapping the active category deselects it; tapping any other one
    /// switches to it. Returns the new active category.
    pub fn toggle(&mut self, category: Category) -> Option<Category> {
        self.active = if self.active == Some(category) {
            None
        } else {
            Some(category)
        };
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
    }
}
