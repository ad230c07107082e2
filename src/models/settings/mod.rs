// Settings module
// User-facing configuration persisted as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_EVENTS_PER_CELL: usize = 1;
pub const MAX_EVENTS_PER_CELL: usize = 10;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("Theme must be 'light' or 'dark'")]
    InvalidTheme,
    #[error("Events per cell must be between {MIN_EVENTS_PER_CELL} and {MAX_EVENTS_PER_CELL}")]
    EventsPerCellOutOfRange,
    #[error("Window size must be at least {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}")]
    WindowTooSmall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Overrides the platform data directory for the event file
    pub data_dir: Option<PathBuf>,
    /// How many event chips a day cell shows before "+N more"
    pub max_events_per_cell: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            data_dir: None,
            max_events_per_cell: 3,
            window_width: 1000.0,
            window_height: 760.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !matches!(self.theme.to_lowercase().as_str(), "light" | "dark") {
            return Err(SettingsValidationError::InvalidTheme);
        }

        if !(MIN_EVENTS_PER_CELL..=MAX_EVENTS_PER_CELL).contains(&self.max_events_per_cell) {
            return Err(SettingsValidationError::EventsPerCellOutOfRange);
        }

        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(SettingsValidationError::WindowTooSmall);
        }

        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}
