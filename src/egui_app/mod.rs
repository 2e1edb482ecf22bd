//! Egui-based interactive campus map (feature = "egui").
//!
//! Renders the category bar, the map surface with its pins, the popup above
//! the selected pin, and the facility detail window with the status vote.
//! All state transitions go through [`crate::screen::MapScreen`].

#![cfg(feature = "egui")]

mod geometry;
mod render;
mod state;
mod ui;

pub use geometry::{to_pos2, to_rect, to_vec2f, viewport_from_rect};
pub use render::icon_glyph;
pub use state::MapApp;
