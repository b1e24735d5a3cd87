mod lifecycle;
mod panels;
mod shortcuts;
mod toast;

pub use self::lifecycle::AppConfig;

use self::toast::ToastManager;
use crate::models::calendar::CalendarState;
use crate::models::navigation::{NavigationDirection, NavigationKey};
use crate::models::settings::Settings;
use crate::services::navigation::{Destination, NavigationRouter};
use crate::ui_egui::components::{BottomNavigation, PanelAction};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::full_date_label;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub struct CalendarApp {
    settings: Settings,
    /// Where the settings were read from, shown on the settings page
    config_path: Option<PathBuf>,
    calendar: CalendarState,
    router: NavigationRouter,
    navigation: BottomNavigation,
    active_theme: CalendarTheme,
    toast_manager: ToastManager,
    /// Combined height of the bottom bars in the last frame
    bottom_bars_height: f32,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        self.render_navigation_bar(ctx);
        if self.router.active() == Destination::Calendar {
            self.render_header(ctx);
            self.render_bottom_panel(ctx);
        }
        self.render_main_panel(ctx);

        if self.settings.show_toasts {
            self.toast_manager
                .render(ctx, self.active_theme.is_dark, self.bottom_bars_height);
        }

        // Signals sent by the navigation bar this frame
        if self.router.process_pending() > 0 {
            ctx.request_repaint();
        }
    }
}

impl CalendarApp {
    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn navigate_month(&mut self, direction: NavigationDirection) {
        self.calendar.navigate_month(direction);
    }

    fn go_to_today(&mut self, today: NaiveDate) {
        self.calendar.go_to_today(today);
    }

    fn handle_panel_action(&mut self, action: PanelAction) {
        log::debug!("Bottom panel action: {:?}", action);
        match action {
            PanelAction::AddEvent => {
                let date = self
                    .calendar
                    .selected_date
                    .unwrap_or(self.calendar.current_date);
                self.toast_manager.info(format!(
                    "{} 일정 추가는 아직 지원되지 않습니다",
                    full_date_label(date)
                ));
            }
            PanelAction::ViewEvents => {
                self.toast_manager.info("등록된 일정이 없습니다");
            }
            PanelAction::OpenSettings => self.router.open(Destination::Settings),
        }
    }

    fn navigate_to(&self, key: NavigationKey) {
        self.navigation.navigate(key);
    }
}
