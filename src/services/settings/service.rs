use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "CALENDAR_SHELL_CONFIG";
const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Resolve the settings path from `CALENDAR_SHELL_CONFIG`, falling back to
    /// the platform config directory.
    pub fn from_environment() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Self::new(path);
        }

        let path = ProjectDirs::from("com", "CalendarShell", "CalendarShell")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME));
        if path.is_none() {
            log::warn!("No home directory found; using default settings");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings, returning defaults when no file exists.
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = self.path() else {
            return Ok(Settings::default());
        };

        if !path.exists() {
            log::info!(
                "No settings file at {}; using defaults",
                path.display()
            );
            return Ok(Settings::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = parse_settings(&text)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

pub fn parse_settings(text: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(text).context("Invalid settings TOML")?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    Ok(settings)
}
