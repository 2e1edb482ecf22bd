//! Campus map overlay engine.
//!
//! This crate models the interactive campus map: a category filter over a
//! static registry of pins, tap hit testing, single-pin selection, popup
//! placement above the selected pin, and routing to facility detail screens
//! with a local availability vote.
//!
//! The binary `campusmap` replays scripted taps and prints the resulting
//! state as JSON.

pub mod category;
pub mod config;
pub mod facility;
pub mod geometry;
pub mod hit_test;
pub mod model;
pub mod navigation;
pub mod popup_place;
pub mod registry;
pub mod screen;
pub mod selection;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
// It renders the map screen and is used by the demo in demos/map_viewer.rs.
#[cfg(feature = "egui")]
pub mod egui_app;
