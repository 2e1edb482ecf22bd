//! Map screen state store.
//!
//! [`MapScreen`] owns all screen-scoped state (active category, selected pin,
//! laid-out markers, viewport) and applies tap events one at a time through
//! named transitions. Observers registered with [`MapScreen::subscribe`] get a
//! [`MapSnapshot`] after every event that changed something.

use serde::{Deserialize, Serialize};

use crate::category::CategorySelector;
use crate::config::MapConfig;
use crate::facility::{VoteStatus, VoteWidget};
use crate::geometry::Vec2f;
use crate::hit_test::{self, PinMarker, TapTarget};
use crate::model::{Category, PinId, SelectedPin, Viewport};
use crate::navigation::{self, Destination};
use crate::popup_place::{self, PopupPlacement};
use crate::registry;
use crate::selection::PinSelection;

/// Discrete user input on the map screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TapEvent {
    /// A category button.
    Category(Category),
    /// A pin, by identity.
    Pin(PinId),
    /// A raw tap position in screen coordinates.
    Point(Vec2f),
    /// The map background.
    Background,
    /// The popup's forward action.
    OpenDetail,
}

/// Info card shown above the selected pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupView {
    pub title: String,
    pub status: VoteStatus,
    pub thumbnail: &'static str,
    pub placement: PopupPlacement,
}

/// Observable view of the screen state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub active_category: Option<Category>,
    pub pins: Vec<PinMarker>,
    pub selection: Option<SelectedPin>,
    pub popup: Option<PopupView>,
    /// Navigation requested by the event that produced this snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Destination>,
}

type Observer = Box<dyn FnMut(&MapSnapshot)>;

pub struct MapScreen {
    config: MapConfig,
    viewport: Viewport,
    categories: CategorySelector,
    selection: PinSelection,
    markers: Vec<PinMarker>,
    observers: Vec<Observer>,
}

impl MapScreen {
    /// Fresh screen state: no category, no selection.
    pub fn new(viewport: Viewport, config: MapConfig) -> Self {
        Self {
            config,
            viewport,
            categories: CategorySelector::new(),
            selection: PinSelection::new(),
            markers: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn active_category(&self) -> Option<Category> {
        self.categories.active()
    }

    pub fn selection(&self) -> Option<&SelectedPin> {
        self.selection.selected()
    }

    /// Currently visible pin markers, bottom to top.
    pub fn markers(&self) -> &[PinMarker] {
        &self.markers
    }

    /// Register an observer called with a snapshot after each state change.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&MapSnapshot) + 'static,
    {
        self.observers.push(Box::new(f));
    }

    // ── transitions ────────────────────────────────────────────────────────

    /// Toggle a category button and drop a selection that is no longer visible.
    pub fn toggle_category(&mut self, category: Category) -> Option<Category> {
        let active = self.categories.toggle(category);
        self.relayout();
        if self.selection.retain_for(active) {
            tracing::debug!(?active, "selection cleared by category change");
        }
        tracing::debug!(?category, ?active, pins = self.markers.len(), "category toggled");
        active
    }

    /// Select a pin by id. Pins of inactive categories are not on screen and
    /// cannot be selected; returns false in that case.
    pub fn select_pin(&mut self, id: PinId) -> bool {
        if self.categories.active() != Some(id.category) {
            tracing::debug!(?id, "ignored selection of hidden pin");
            return false;
        }
        let Some(pin) = registry::pin(id) else {
            return false;
        };
        let sel = self.selection.select(pin);
        tracing::debug!(label = %sel.label, x = sel.offset.x, y = sel.offset.y, "pin selected");
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Resolve a raw tap: a pin tap selects, a background tap clears. Taps on
    /// the popup card or outside the map are ignored.
    pub fn tap(&mut self, point: Vec2f) -> TapTarget {
        let popup_rect = self.popup().map(|p| p.placement.rect);
        let target = hit_test::classify_tap(&self.markers, &self.viewport, popup_rect, point);
        match target {
            TapTarget::Pin(id) => {
                self.select_pin(id);
            }
            TapTarget::Background => self.clear_selection(),
            TapTarget::Popup | TapTarget::Outside => {}
        }
        target
    }

    /// Forward action of the popup. Nothing happens without a selection.
    pub fn open_detail(&self) -> Option<Destination> {
        let sel = self.selection.selected()?;
        Some(navigation::destination_for(self.categories.active(), &sel.label))
    }

    /// Resize the map surface. Pins keep their center-relative offsets.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.relayout();
            self.notify(None);
        }
    }

    /// Apply one event and notify observers if anything changed. Returns the
    /// requested navigation, if any.
    pub fn handle(&mut self, event: TapEvent) -> Option<Destination> {
        let before = (self.categories, self.selection.clone());
        let navigation = match event {
            TapEvent::Category(c) => {
                self.toggle_category(c);
                None
            }
            TapEvent::Pin(id) => {
                self.select_pin(id);
                None
            }
            TapEvent::Point(p) => {
                self.tap(p);
                None
            }
            TapEvent::Background => {
                self.clear_selection();
                None
            }
            TapEvent::OpenDetail => self.open_detail(),
        };
        let changed = before != (self.categories, self.selection.clone());
        if changed || navigation.is_some() {
            self.notify(navigation.clone());
        }
        navigation
    }

    /// Apply `events` in order and return the snapshot after each one, carrying
    /// the navigation that event requested.
    pub fn replay(&mut self, events: &[TapEvent]) -> Vec<MapSnapshot> {
        events
            .iter()
            .map(|ev| {
                let navigation = self.handle(*ev);
                MapSnapshot {
                    navigation,
                    ..self.snapshot()
                }
            })
            .collect()
    }

    // ── views ──────────────────────────────────────────────────────────────

    pub fn popup(&self) -> Option<PopupView> {
        let sel = self.selection.selected()?;
        let active = self.categories.active();
        Some(PopupView {
            title: sel.label.clone(),
            status: VoteWidget::from_config(&self.config).current_status(),
            thumbnail: registry::thumbnail_for(active),
            placement: popup_place::place_popup(sel, &self.viewport, &self.config),
        })
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            active_category: self.categories.active(),
            pins: self.markers.clone(),
            selection: self.selection.selected().cloned(),
            popup: self.popup(),
            navigation: None,
        }
    }

    fn relayout(&mut self) {
        self.markers = hit_test::render_pins(self.categories.active(), &self.viewport, &self.config);
    }

    fn notify(&mut self, navigation: Option<Destination>) {
        if self.observers.is_empty() {
            return;
        }
        let mut snap = self.snapshot();
        snap.navigation = navigation;
        for obs in &mut self.observers {
            obs(&snap);
        }
    }
}
