//! Theme module for the calendar shell
//!
//! Defines the CalendarTheme palette and applies it to an egui context.

use crate::models::settings::Settings;
use egui::Color32;

/// Colors used across the header, month grid and bottom bars
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Month grid background color
    pub calendar_background: Color32,

    pub today_background: Color32,
    pub today_border: Color32,

    /// Background of the selected day cell
    pub selected_background: Color32,

    /// Sunday column text
    pub sunday_text: Color32,

    /// Saturday column text
    pub saturday_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (days outside the displayed month)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(200, 220, 255),
            sunday_text: Color32::from_rgb(210, 50, 50),
            saturday_text: Color32::from_rgb(50, 90, 210),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(150, 150, 150),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(60, 80, 120),
            sunday_text: Color32::from_rgb(255, 120, 120),
            saturday_text: Color32::from_rgb(120, 160, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(120, 120, 120),
        }
    }

    pub fn for_settings(settings: &Settings) -> Self {
        if settings.is_dark_theme() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Text color for a weekday column, Sunday = 0
    pub fn weekday_text(&self, days_from_sunday: u32) -> Color32 {
        match days_from_sunday {
            0 => self.sunday_text,
            6 => self.saturday_text,
            _ => self.text_primary,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.calendar_background;
        visuals.selection.bg_fill = self.selected_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_and_dark_differ() {
        let light = CalendarTheme::light();
        let dark = CalendarTheme::dark();
        assert!(!light.is_dark);
        assert!(dark.is_dark);
        assert_ne!(light.app_background, dark.app_background);
    }

    #[test]
    fn test_theme_follows_settings() {
        let settings = Settings {
            theme: "dark".to_string(),
            ..Settings::default()
        };
        assert!(CalendarTheme::for_settings(&settings).is_dark);
        assert!(!CalendarTheme::for_settings(&Settings::default()).is_dark);
    }

    #[test]
    fn test_weekend_columns_are_colored() {
        let theme = CalendarTheme::light();
        assert_eq!(theme.weekday_text(0), theme.sunday_text);
        assert_eq!(theme.weekday_text(6), theme.saturday_text);
        assert_eq!(theme.weekday_text(3), theme.text_primary);
    }
}
