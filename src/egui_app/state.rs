#![cfg(feature = "egui")]

use eframe::egui;

use crate::config::MapConfig;
use crate::facility::FacilityDetail;
use crate::model::Viewport;
use crate::navigation::Destination;
use crate::screen::{MapScreen, TapEvent};

/// Facility detail window currently shown on top of the map.
pub(crate) enum DetailView {
    Facility(FacilityDetail),
    Unavailable(&'static str),
}

/// Interactive Egui application for the campus map screen.
pub struct MapApp {
    pub screen: MapScreen,
    pub(crate) detail: Option<DetailView>,
}

impl MapApp {
    /// Create a new app with a fresh map screen.
    pub fn new(config: MapConfig) -> Self {
        Self {
            screen: MapScreen::new(Viewport::default(), config),
            detail: None,
        }
    }

    /// Apply an event and open the detail window if it requested navigation.
    pub fn dispatch(&mut self, event: TapEvent) {
        if let Some(dest) = self.screen.handle(event) {
            self.navigate(dest);
        }
    }

    fn navigate(&mut self, dest: Destination) {
        self.detail = Some(match dest.open(self.screen.config()) {
            Some(detail) => DetailView::Facility(detail),
            None => match dest {
                Destination::Unavailable { message } => DetailView::Unavailable(message),
                Destination::Facility { .. } => DetailView::Unavailable(crate::navigation::UNAVAILABLE_MESSAGE),
            },
        });
    }

    /// Whether a detail window is open.
    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Name of the facility shown in the detail window, if any.
    pub fn detail_name(&self) -> Option<&str> {
        match &self.detail {
            Some(DetailView::Facility(d)) => Some(&d.name),
            _ => None,
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}
