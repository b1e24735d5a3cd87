// Settings module
// Read-only configuration loaded from settings.toml

use crate::models::navigation::SignalRouting;
use serde::Deserialize;
use std::path::PathBuf;

pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("theme must be 'light' or 'dark', got '{0}'")]
    InvalidTheme(String),
    #[error("window width {0} is below the minimum of {min}", min = MIN_WINDOW_WIDTH)]
    WindowTooNarrow(f32),
    #[error("window height {0} is below the minimum of {min}", min = MIN_WINDOW_HEIGHT)]
    WindowTooShort(f32),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub signal_routing: SignalRouting,
    /// Font with Hangul glyphs; egui's bundled fonts have none
    pub font_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    pub show_toasts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            signal_routing: SignalRouting::AsShipped,
            font_path: None,
            window_width: 420.0,
            window_height: 720.0,
            show_toasts: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !matches!(self.theme.as_str(), "light" | "dark") {
            return Err(SettingsError::InvalidTheme(self.theme.clone()));
        }
        if self.window_width < MIN_WINDOW_WIDTH {
            return Err(SettingsError::WindowTooNarrow(self.window_width));
        }
        if self.window_height < MIN_WINDOW_HEIGHT {
            return Err(SettingsError::WindowTooShort(self.window_height));
        }
        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme == "dark"
    }
}
