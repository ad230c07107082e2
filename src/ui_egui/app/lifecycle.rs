use super::CalendarApp;
use crate::services::event_store::EventStore;
use crate::services::settings::{resolve_data_dir, SettingsService};
use crate::services::storage::FileStorage;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_default_location();
        let settings = settings_service.load_or_default();
        log::info!(
            "Loaded settings: theme={}, max_events_per_cell={}",
            settings.theme,
            settings.max_events_per_cell
        );

        let storage = FileStorage::new(resolve_data_dir(&settings));
        log::info!("Storing events under {}", storage.dir().display());
        let store = EventStore::load(storage);

        let app = Self::from_parts(settings, store);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        // Header and status bar before CentralPanel so they take their space first
        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_main_panel(ctx);

        self.render_event_dialog(ctx);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.flush_if_dirty();
    }

    /// Retry a failed save. Every mutation already persists, so this only
    /// writes when the last attempt failed.
    pub(crate) fn flush_if_dirty(&mut self) {
        if !self.store.is_dirty() {
            return;
        }
        match self.store.save() {
            Ok(()) => log::info!("Saved pending event changes"),
            Err(e) => log::error!("Failed to save pending event changes: {e:#}"),
        }
    }
}
