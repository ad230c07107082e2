mod lifecycle;
mod navigation;
mod shortcuts;
mod status_bar;

use crate::models::settings::Settings;
use crate::services::event_store::EventStore;
use crate::ui_egui::event_dialog::{render_event_dialog, EventEditor, SubmitOutcome};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::{MonthView, MonthViewAction};
use crate::utils::date::month_title;
use chrono::{Local, NaiveDate};

pub struct CalendarApp {
    /// Settings loaded at startup
    settings: Settings,
    /// All events, persisted on every mutation
    store: EventStore,
    /// Create/edit dialog state
    editor: EventEditor,
    /// Any date inside the displayed month
    current_date: NaiveDate,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl CalendarApp {
    /// Build the app from already-loaded parts, showing the current month.
    pub fn from_parts(settings: Settings, store: EventStore) -> Self {
        let active_theme = CalendarTheme::for_settings(&settings);
        Self {
            settings,
            store,
            editor: EventEditor::new(),
            current_date: Local::now().date_naive(),
            active_theme,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Open the editor for a new event on today's date.
    pub fn open_quick_add(&mut self) {
        self.editor.open_for_day(Local::now().date_naive());
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("month_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous month").clicked() {
                    self.navigate_previous();
                }
                if ui.button("Today").clicked() {
                    self.jump_to_today();
                }
                if ui.button("▶").on_hover_text("Next month").clicked() {
                    self.navigate_next();
                }

                ui.add_space(12.0);
                ui.heading(month_title(self.current_date));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("➕ New event").clicked() {
                        self.open_quick_add();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .outer_margin(egui::Margin::ZERO)
            .inner_margin(egui::Margin::same(8.0));

        let action = egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                MonthView::show(
                    ui,
                    self.current_date,
                    &self.store,
                    &self.active_theme,
                    self.settings.max_events_per_cell,
                )
            })
            .inner;

        self.apply_view_action(action);
    }

    /// Route a click from the month grid to the editor. Ignored while the dialog is open.
    pub(crate) fn apply_view_action(&mut self, action: MonthViewAction) {
        if self.editor.is_open() {
            return;
        }
        match action {
            MonthViewAction::None => {}
            MonthViewAction::CreateEvent(day) => self.editor.open_for_day(day),
            MonthViewAction::EditEvent(day, event) => self.editor.open_for_event(day, event),
        }
    }

    fn render_event_dialog(&mut self, ctx: &egui::Context) {
        if !self.editor.is_open() {
            return;
        }

        let result = render_event_dialog(ctx, &mut self.editor, &mut self.store);
        match result.outcome {
            Some(SubmitOutcome::Created(event)) => log::info!("Created event '{}'", event.title),
            Some(SubmitOutcome::Updated(event)) => log::info!("Updated event '{}'", event.title),
            Some(SubmitOutcome::Rejected(err)) => log::debug!("Event rejected: {}", err),
            Some(SubmitOutcome::Ignored) | None => {}
        }
        if result.deleted {
            log::info!("Deleted event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventDraft;
    use crate::services::storage::MemoryStorage;
    use crate::ui_egui::event_dialog::EditorMode;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> CalendarApp {
        CalendarApp::from_parts(Settings::default(), EventStore::load(MemoryStorage::new()))
    }

    #[test]
    fn test_quick_add_opens_creating_today() {
        let mut app = app();
        app.current_date = day(1999, 1, 1);

        app.open_quick_add();

        assert_eq!(
            app.editor.mode(),
            &EditorMode::Creating {
                day: Local::now().date_naive()
            }
        );
    }

    #[test]
    fn test_day_click_opens_creating_for_that_day() {
        let mut app = app();
        app.apply_view_action(MonthViewAction::CreateEvent(day(2024, 3, 4)));
        assert_eq!(app.editor.mode(), &EditorMode::Creating { day: day(2024, 3, 4) });
    }

    #[test]
    fn test_chip_click_opens_editing_with_prefilled_form() {
        let mut app = app();
        let event = app
            .store
            .add_event(day(2024, 3, 4), EventDraft::new("Standup").with_time("09:30"))
            .unwrap();

        app.apply_view_action(MonthViewAction::EditEvent(day(2024, 3, 4), event.clone()));

        assert_eq!(
            app.editor.mode(),
            &EditorMode::Editing {
                day: day(2024, 3, 4),
                event: event.clone()
            }
        );
        assert_eq!(app.editor.form, event.to_draft());
    }

    #[test]
    fn test_grid_clicks_ignored_while_dialog_open() {
        let mut app = app();
        app.apply_view_action(MonthViewAction::CreateEvent(day(2024, 3, 4)));
        app.editor.form.title = "Half typed".to_string();

        app.apply_view_action(MonthViewAction::CreateEvent(day(2024, 3, 9)));

        assert_eq!(app.editor.mode(), &EditorMode::Creating { day: day(2024, 3, 4) });
        assert_eq!(app.editor.form.title, "Half typed");
    }

    #[test]
    fn test_theme_follows_settings() {
        let settings = Settings {
            theme: "dark".to_string(),
            ..Settings::default()
        };
        let app = CalendarApp::from_parts(settings, EventStore::load(MemoryStorage::new()));
        assert!(app.active_theme.is_dark);
    }
}
