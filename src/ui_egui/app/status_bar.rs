//! Status bar showing the month's event count, save state and shortcut hints.

use super::CalendarApp;
use crate::services::event_store::EventStore;
use crate::utils::date::{first_of_month, last_of_month};
use chrono::NaiveDate;
use egui::{Color32, RichText};

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

/// Number of events stored on days of the month containing `date`.
pub(crate) fn events_in_month(store: &EventStore, date: NaiveDate) -> usize {
    let first = first_of_month(date);
    let last = last_of_month(date);
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| store.events_for_day(day).len())
        .sum()
}

impl CalendarApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let is_dark = self.active_theme.is_dark;
        let secondary = secondary_text_color(is_dark);
        let count = events_in_month(&self.store, self.current_date);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} event{} this month",
                        count,
                        if count == 1 { "" } else { "s" }
                    ))
                    .color(secondary)
                    .small(),
                );

                if self.store.is_dirty() {
                    ui.separator();
                    ui.label(
                        RichText::new("⚠ Unsaved changes")
                            .color(Color32::from_rgb(200, 140, 0))
                            .small(),
                    )
                    .on_hover_text("The last save failed; it will be retried on the next change");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new("Ctrl+N new · Ctrl+T today · ←/→ month")
                            .color(secondary)
                            .small(),
                    );
                });
            });
        });
    }
}
