// Month Calendar Application
// Main entry point

use month_calendar::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let settings = SettingsService::from_default_location().load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT])
            .with_title("Month Calendar"),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)))),
    )
}
