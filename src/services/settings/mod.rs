//! Settings persistence.

mod service;

pub use service::{resolve_data_dir, SettingsService};
