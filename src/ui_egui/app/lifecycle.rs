use super::toast::ToastManager;
use super::CalendarApp;
use crate::models::calendar::CalendarState;
use crate::models::settings::Settings;
use crate::services::navigation::{signal_channel, NavigationRouter};
use crate::services::settings::SettingsService;
use crate::ui_egui::components::BottomNavigation;
use crate::ui_egui::fonts::install_hangul_font;
use crate::ui_egui::theme::CalendarTheme;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Settings plus where they came from, resolved before the window opens.
#[derive(Debug, Default)]
pub struct AppConfig {
    pub settings: Settings,
    pub config_path: Option<PathBuf>,
    /// Set when the file existed but could not be used
    pub load_error: Option<String>,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let service = SettingsService::from_environment();
        let config_path = service.path().map(PathBuf::from);

        match service.load() {
            Ok(settings) => Self {
                settings,
                config_path,
                load_error: None,
            },
            Err(err) => {
                log::error!("Falling back to default settings: {:#}", err);
                Self {
                    settings: Settings::default(),
                    config_path,
                    load_error: Some(format!("{:#}", err)),
                }
            }
        }
    }
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let font_path = config.settings.font_path.clone();
        let mut app = Self::headless(config, Self::today());

        app.active_theme.apply_to_context(&cc.egui_ctx);

        match font_path {
            Some(path) => {
                if let Err(err) = install_hangul_font(&cc.egui_ctx, &path) {
                    log::warn!("{:#}", err);
                    app.toast_manager
                        .warning("한글 글꼴을 불러오지 못했습니다. 설정의 font_path를 확인하세요.");
                }
            }
            None => log::warn!("No font_path configured; Korean labels may not render"),
        }

        app
    }

    /// Everything except the egui context setup.
    pub(super) fn headless(config: AppConfig, today: NaiveDate) -> Self {
        let AppConfig {
            settings,
            config_path,
            load_error,
        } = config;

        let (sender, receiver) = signal_channel();
        let navigation = BottomNavigation::new(settings.signal_routing, sender);
        let mut toast_manager = ToastManager::new();
        if load_error.is_some() {
            toast_manager.warning("설정 파일을 읽지 못해 기본값을 사용합니다");
        }

        log::info!(
            "Starting on {} with theme '{}' and {:?} routing",
            today,
            settings.theme,
            settings.signal_routing
        );

        Self {
            active_theme: CalendarTheme::for_settings(&settings),
            settings,
            config_path,
            calendar: CalendarState::new(today),
            router: NavigationRouter::new(receiver),
            navigation,
            toast_manager,
            bottom_bars_height: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_is_reported_once() {
        let config = AppConfig {
            load_error: Some("bad toml".to_string()),
            ..AppConfig::default()
        };
        let app = CalendarApp::headless(config, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(app.toast_manager.len(), 1);
        assert_eq!(app.settings, Settings::default());
    }

    #[test]
    fn test_dark_theme_is_selected_from_settings() {
        let config = AppConfig {
            settings: Settings {
                theme: "dark".to_string(),
                ..Settings::default()
            },
            ..AppConfig::default()
        };
        let app = CalendarApp::headless(config, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert!(app.active_theme.is_dark);
    }
}
