//! Month header: "2025년 3월" with previous/next arrows and a today button.
//!
//! The header holds no state. It reports intents through the two callbacks
//! and leaves the month arithmetic to whoever owns the calendar state.

use crate::models::navigation::NavigationDirection;
use crate::utils::date::year_month_title;
use chrono::NaiveDate;
use egui::RichText;

/// Controls the user can activate on the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControl {
    PreviousMonth,
    Today,
    NextMonth,
}

pub struct Header<N, T>
where
    N: FnMut(NavigationDirection),
    T: FnMut(),
{
    current_date: NaiveDate,
    on_navigate_month: N,
    on_go_to_today: T,
}

impl<N, T> Header<N, T>
where
    N: FnMut(NavigationDirection),
    T: FnMut(),
{
    pub fn new(current_date: NaiveDate, on_navigate_month: N, on_go_to_today: T) -> Self {
        Self {
            current_date,
            on_navigate_month,
            on_go_to_today,
        }
    }

    pub fn title(&self) -> String {
        year_month_title(self.current_date)
    }

    /// Invoke the callback bound to `control` once.
    pub fn activate(&mut self, control: HeaderControl) {
        match control {
            HeaderControl::PreviousMonth => (self.on_navigate_month)(NavigationDirection::Previous),
            HeaderControl::NextMonth => (self.on_navigate_month)(NavigationDirection::Next),
            HeaderControl::Today => (self.on_go_to_today)(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut activated = None;

        ui.horizontal(|ui| {
            if ui.button("오늘").on_hover_text("Ctrl+T").clicked() {
                activated = Some(HeaderControl::Today);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").on_hover_text("다음 달 (→)").clicked() {
                    activated = Some(HeaderControl::NextMonth);
                }
                ui.label(RichText::new(self.title()).heading().strong());
                if ui.button("◀").on_hover_text("이전 달 (←)").clicked() {
                    activated = Some(HeaderControl::PreviousMonth);
                }
            });
        });

        if let Some(control) = activated {
            self.activate(control);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_title_uses_year_and_month_label() {
        let header = Header::new(date(2025, 3, 15), |_| {}, || {});
        assert_eq!(header.title(), "2025년 3월");
    }

    #[test]
    fn test_today_invokes_callback_once_per_activation() {
        let today_calls = Cell::new(0);
        let nav_calls = Cell::new(0);
        let mut header = Header::new(
            date(2025, 3, 15),
            |_| nav_calls.set(nav_calls.get() + 1),
            || today_calls.set(today_calls.get() + 1),
        );

        header.activate(HeaderControl::Today);
        assert_eq!(today_calls.get(), 1);

        header.activate(HeaderControl::Today);
        assert_eq!(today_calls.get(), 2);
        assert_eq!(nav_calls.get(), 0);
    }

    #[test]
    fn test_arrows_report_direction() {
        let directions = RefCell::new(Vec::new());
        let mut header = Header::new(
            date(2025, 3, 15),
            |direction| directions.borrow_mut().push(direction),
            || panic!("today should not fire"),
        );

        header.activate(HeaderControl::PreviousMonth);
        header.activate(HeaderControl::NextMonth);

        assert_eq!(
            *directions.borrow(),
            vec![NavigationDirection::Previous, NavigationDirection::Next]
        );
    }
}
