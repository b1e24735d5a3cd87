//! Pages for the non-calendar destinations.

use crate::models::settings::Settings;
use crate::services::navigation::Destination;
use crate::utils::date::{full_date_label, weekday_label};
use chrono::NaiveDate;
use egui::RichText;
use std::path::Path;

/// Action requested from a destination page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    None,
    OpenCalendar,
}

pub fn render_home(ui: &mut egui::Ui, today: NaiveDate) -> PageAction {
    ui.heading(Destination::Home.title());
    ui.add_space(8.0);
    ui.label(RichText::new(weekday_label(today)).weak());
    ui.label(RichText::new(full_date_label(today)).strong());
    ui.add_space(12.0);
    open_calendar_button(ui)
}

/// Community, boards and chat have no content of their own yet.
pub fn render_placeholder(ui: &mut egui::Ui, destination: Destination) -> PageAction {
    ui.heading(destination.title());
    ui.add_space(8.0);
    ui.label(RichText::new("준비 중인 화면입니다.").weak());
    ui.add_space(12.0);
    open_calendar_button(ui)
}

fn open_calendar_button(ui: &mut egui::Ui) -> PageAction {
    if ui.button("📅 캘린더 열기").clicked() {
        PageAction::OpenCalendar
    } else {
        PageAction::None
    }
}

/// Read-only view of the loaded configuration.
pub fn render_settings(
    ui: &mut egui::Ui,
    settings: &Settings,
    config_path: Option<&Path>,
) -> PageAction {
    ui.heading(Destination::Settings.title());
    ui.add_space(8.0);

    egui::Grid::new("settings_summary")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("테마");
            ui.label(&settings.theme);
            ui.end_row();

            ui.label("내비게이션");
            ui.label(format!("{:?}", settings.signal_routing));
            ui.end_row();

            ui.label("글꼴");
            ui.label(
                settings
                    .font_path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "기본".to_string()),
            );
            ui.end_row();

            ui.label("알림 표시");
            ui.label(if settings.show_toasts { "켜짐" } else { "꺼짐" });
            ui.end_row();
        });

    ui.add_space(8.0);
    if let Some(path) = config_path {
        ui.label(RichText::new(format!("설정 파일: {}", path.display())).small().weak());
    }
    ui.add_space(12.0);
    open_calendar_button(ui)
}
