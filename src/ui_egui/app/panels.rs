//! Panel layout: header on top, tab bar and action panel at the bottom,
//! and the active destination in the middle.

use super::CalendarApp;
use crate::models::navigation::NavigationKey;
use crate::services::navigation::Destination;
use crate::ui_egui::components::{BottomPanel, Header, PanelAction};
use crate::ui_egui::views::{destination_page, MonthGrid, PageAction};
use std::cell::Cell;

const NAV_BAR_HEIGHT: f32 = 44.0;

impl CalendarApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let navigate = Cell::new(None);
        let today = Cell::new(false);

        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            ui.add_space(4.0);
            Header::new(
                self.calendar.current_date,
                |direction| navigate.set(Some(direction)),
                || today.set(true),
            )
            .show(ui);
            ui.add_space(4.0);
        });

        if let Some(direction) = navigate.get() {
            self.navigate_month(direction);
        }
        if today.get() {
            self.go_to_today(Self::today());
        }
    }

    /// Outermost bottom bar; must be rendered before the action panel.
    pub(super) fn render_navigation_bar(&mut self, ctx: &egui::Context) {
        let active = self.router.active();
        let mut pressed = None;

        let response = egui::TopBottomPanel::bottom("navigation_bar")
            .exact_height(NAV_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.columns(NavigationKey::ALL.len(), |columns| {
                    for (column, key) in columns.iter_mut().zip(NavigationKey::ALL) {
                        column.vertical_centered_justified(|ui| {
                            let selected =
                                Destination::for_signal(key.own_signal()) == active;
                            if ui.selectable_label(selected, key.label()).clicked() {
                                pressed = Some(key);
                            }
                        });
                    }
                });
            });
        self.bottom_bars_height = response.response.rect.height();

        if let Some(key) = pressed {
            self.navigate_to(key);
        }
    }

    pub(super) fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        let action = Cell::new(None);

        let response = egui::TopBottomPanel::bottom("action_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            BottomPanel::new(self.calendar.selected_date)
                .on_add_event(|| action.set(Some(PanelAction::AddEvent)))
                .on_view_events(|| action.set(Some(PanelAction::ViewEvents)))
                .on_open_settings(|| action.set(Some(PanelAction::OpenSettings)))
                .show(ui);
            ui.add_space(6.0);
        });
        self.bottom_bars_height += response.response.rect.height();

        if let Some(action) = action.get() {
            self.handle_panel_action(action);
        }
    }

    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let today = Self::today();
        let mut clicked_day = None;
        let mut page_action = PageAction::None;

        egui::CentralPanel::default().show(ctx, |ui| match self.router.active() {
            Destination::Calendar => {
                clicked_day = MonthGrid::new(&self.calendar, &self.active_theme, today).show(ui);
            }
            Destination::Home => page_action = destination_page::render_home(ui, today),
            Destination::Settings => {
                page_action = destination_page::render_settings(
                    ui,
                    &self.settings,
                    self.config_path.as_deref(),
                );
            }
            other => page_action = destination_page::render_placeholder(ui, other),
        });

        if let Some(day) = clicked_day {
            self.calendar.select(day);
        }
        if page_action == PageAction::OpenCalendar {
            self.router.open(Destination::Calendar);
        }
    }
}
