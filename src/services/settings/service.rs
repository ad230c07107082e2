use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "KenBoyle", "MonthCalendar")
}

/// Loads and stores [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the platform config directory, or the working directory
    /// when no home directory can be determined.
    pub fn from_default_location() -> Self {
        let path = match project_dirs() {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for settings");
                PathBuf::from(SETTINGS_FILE)
            }
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Like [`get`](Self::get) but never fails; problems are logged and defaults returned.
    pub fn load_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Directory holding the event file: the configured override, then the
/// platform data directory, then the working directory.
pub fn resolve_data_dir(settings: &Settings) -> PathBuf {
    if let Some(dir) = &settings.data_dir {
        return dir.clone();
    }

    match project_dirs() {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            log::warn!("Unable to resolve project directory; using current dir for events");
            PathBuf::from(".")
        }
    }
}
