//! Bottom action panel.
//!
//! Shows the selected date as two lines (weekday, full date) and three quick
//! actions. Every action has its own callback; unset callbacks do nothing.

use crate::utils::date::{full_date_label, weekday_label};
use chrono::NaiveDate;
use egui::RichText;

/// Two-line label for a selected date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDateLabel {
    pub weekday: &'static str,
    pub date: String,
}

impl SelectedDateLabel {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            weekday: weekday_label(date),
            date: full_date_label(date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    AddEvent,
    ViewEvents,
    OpenSettings,
}

impl PanelAction {
    pub const ALL: [PanelAction; 3] = [
        PanelAction::AddEvent,
        PanelAction::ViewEvents,
        PanelAction::OpenSettings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelAction::AddEvent => "➕ 일정 추가",
            PanelAction::ViewEvents => "📋 일정 보기",
            PanelAction::OpenSettings => "⚙ 설정",
        }
    }
}

type Callback<'a> = Box<dyn FnMut() + 'a>;

pub struct BottomPanel<'a> {
    selected_date: Option<NaiveDate>,
    on_add_event: Callback<'a>,
    on_view_events: Callback<'a>,
    on_open_settings: Callback<'a>,
}

impl<'a> BottomPanel<'a> {
    pub fn new(selected_date: Option<NaiveDate>) -> Self {
        Self {
            selected_date,
            on_add_event: Box::new(|| {}),
            on_view_events: Box::new(|| {}),
            on_open_settings: Box::new(|| {}),
        }
    }

    pub fn on_add_event(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_add_event = Box::new(callback);
        self
    }

    pub fn on_view_events(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_view_events = Box::new(callback);
        self
    }

    pub fn on_open_settings(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_open_settings = Box::new(callback);
        self
    }

    /// `None` when nothing is selected; the label region is then omitted.
    pub fn date_label(&self) -> Option<SelectedDateLabel> {
        self.selected_date.map(SelectedDateLabel::for_date)
    }

    pub fn activate(&mut self, action: PanelAction) {
        match action {
            PanelAction::AddEvent => (self.on_add_event)(),
            PanelAction::ViewEvents => (self.on_view_events)(),
            PanelAction::OpenSettings => (self.on_open_settings)(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(label) = self.date_label() {
            ui.vertical(|ui| {
                ui.label(RichText::new(label.weekday).small().weak());
                ui.label(RichText::new(&label.date).strong());
            });
            ui.add_space(6.0);
        }

        let mut activated = None;
        ui.columns(PanelAction::ALL.len(), |columns| {
            for (column, action) in columns.iter_mut().zip(PanelAction::ALL) {
                column.vertical_centered_justified(|ui| {
                    if ui.button(action.label()).clicked() {
                        activated = Some(action);
                    }
                });
            }
        });

        if let Some(action) = activated {
            self.activate(action);
        }
    }
}
