#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, RichText, Sense, Vec2};

use crate::facility::VoteStatus;
use crate::registry;
use crate::screen::TapEvent;

use super::geometry::{to_rect, to_vec2f, viewport_from_rect};
use super::render::{icon_glyph, paint_map_surface, paint_pin, paint_popup_card, status_color, PIN_BLUE};
use super::state::{DetailView, MapApp};

pub(crate) fn update(app: &mut MapApp, ctx: &egui::Context) {
    let mut events: Vec<TapEvent> = Vec::new();

    egui::TopBottomPanel::top("categories").show(ctx, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                for btn in registry::category_buttons() {
                    let active = app.screen.active_category() == Some(btn.category);
                    let text = RichText::new(format!("{} {}", icon_glyph(btn.icon), btn.title)).color(PIN_BLUE);
                    if ui.selectable_label(active, text).clicked() {
                        events.push(TapEvent::Category(btn.category));
                    }
                }
            });
        });
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
            app.screen.set_viewport(viewport_from_rect(response.rect));

            let viewport = *app.screen.viewport();
            paint_map_surface(&painter, &viewport);
            let selected = app.screen.selection().cloned();
            for marker in app.screen.markers() {
                let is_sel = selected.as_ref().is_some_and(|s| s.matches(marker.pin));
                paint_pin(&painter, marker, is_sel);
            }

            if let Some(popup) = app.screen.popup() {
                let rect = to_rect(popup.placement.rect);
                paint_popup_card(&painter, rect, popup.thumbnail);
                let body = egui::Rect::from_min_max(
                    egui::pos2(rect.left() + 12.0, rect.top() + rect.height() * 0.45 + 6.0),
                    rect.max - Vec2::splat(8.0),
                );
                ui.scope_builder(egui::UiBuilder::new().max_rect(body), |ui| {
                    ui.label(RichText::new(&popup.title).strong().size(18.0).color(Color32::BLACK));
                    ui.horizontal(|ui| {
                        let available = popup.status == VoteStatus::Available;
                        ui.label(RichText::new(popup.status.label()).color(Color32::GRAY));
                        ui.label(RichText::new("●").color(status_color(available)));
                        if ui.button("›").on_hover_text("Open details").clicked() {
                            events.push(TapEvent::OpenDetail);
                        }
                    });
                });
            }

            // Pin and background taps; the popup button above takes precedence.
            if response.clicked() && !events.contains(&TapEvent::OpenDetail) {
                if let Some(pos) = response.interact_pointer_pos() {
                    events.push(TapEvent::Point(to_vec2f(pos)));
                }
            }
        });

    for ev in events {
        app.dispatch(ev);
    }

    show_detail_window(app, ctx);
}

fn show_detail_window(app: &mut MapApp, ctx: &egui::Context) {
    let mut open = app.detail.is_some();
    match &mut app.detail {
        Some(DetailView::Facility(detail)) => {
            egui::Window::new(detail.name.clone())
                .open(&mut open)
                .resizable(true)
                .vscroll(true)
                .min_width(320.0)
                .show(ctx, |ui| {
                    ui.label(RichText::new(detail.info.description_heading).small().color(PIN_BLUE));
                    ui.heading(&detail.name);
                    ui.separator();

                    ui.label(RichText::new(detail.info.status_heading).strong());
                    ui.label(RichText::new(format!("\"{}\"", detail.info.status_prompt)).color(Color32::GRAY));
                    for status in [VoteStatus::Available, VoteStatus::Unavailable] {
                        let share = detail.votes.tally.share(status);
                        ui.horizontal(|ui| {
                            let picked = detail.votes.selected == status;
                            if ui.radio(picked, status.label()).clicked() {
                                detail.vote(status);
                            }
                            ui.label(format!("{}%", share));
                        });
                        ui.add(
                            egui::ProgressBar::new(share as f32 / 100.0)
                                .fill(status_color(status == VoteStatus::Available)),
                        );
                    }
                    ui.label(format!("Current status: {}", detail.votes.current_status().label()));
                    ui.separator();

                    ui.label(RichText::new("Pathway Description").strong());
                    for step in detail.pathway() {
                        ui.label(RichText::new(step.title).strong());
                        ui.label(format!("-> {}", step.description));
                    }
                });
        }
        Some(DetailView::Unavailable(message)) => {
            let message = *message;
            egui::Window::new("Details")
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(message);
                });
        }
        None => {}
    }
    if !open {
        app.detail = None;
    }
}
