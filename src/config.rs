//! Tunables for the map overlay and facility screens.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "vertical_lift": 72.0, "default_available_votes": 70 }
//! ```

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::geometry::Vec2f;

/// Smallest allowed pin hit diameter, in logical units.
pub const MIN_PIN_HIT_DIAMETER: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Distance the popup is lifted above its pin.
    pub vertical_lift: f32,
    /// Diameter of a pin's circular tap target. Values below
    /// [`MIN_PIN_HIT_DIAMETER`] are raised to it.
    pub pin_hit_diameter: f32,
    /// Popup card size.
    pub popup_size: Vec2f,
    /// Minimum distance kept between a clamped popup and the viewport edge.
    pub edge_margin: f32,
    /// Keep the popup inside the viewport. When false the popup may be
    /// partially off-screen.
    pub clamp_popup: bool,
    /// Initial "available" share on a facility screen; the rest is "unavailable".
    pub default_available_votes: u8,
    /// Amount a single vote adds to its side.
    pub vote_step: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            vertical_lift: 60.0,
            pin_hit_diameter: 32.0,
            popup_size: Vec2f::new(280.0, 160.0),
            edge_margin: 8.0,
            clamp_popup: true,
            default_available_votes: 100,
            vote_step: 10,
        }
    }
}

impl MapConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("Read config {}", path))?;
        let cfg: MapConfig =
            serde_json::from_str(&text).with_context(|| format!("Parse config {}", path))?;
        tracing::debug!(%path, ?cfg, "loaded map config");
        Ok(cfg)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Hit diameter after applying the minimum.
    pub fn effective_hit_diameter(&self) -> f32 {
        self.pin_hit_diameter.max(MIN_PIN_HIT_DIAMETER)
    }
}
