// Calendar Shell Application
// Main entry point

use anyhow::anyhow;
use calendar_shell::models::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use calendar_shell::ui_egui::{AppConfig, CalendarApp};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Shell");

    let config = AppConfig::from_environment();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("캘린더")
            .with_inner_size([config.settings.window_width, config.settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "calendar-shell",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("Calendar window failed: {}", e))
}
