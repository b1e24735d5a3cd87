mod service;

pub use service::{parse_settings, SettingsService, CONFIG_ENV_VAR};
