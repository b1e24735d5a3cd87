//! Calendar state owned by the app shell.
//!
//! The header and bottom panel only read this; all mutation happens here in
//! response to their intents.

use crate::models::navigation::NavigationDirection;
use crate::utils::date::shift_month;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    /// Date whose month is displayed
    pub current_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_date: today,
            selected_date: None,
        }
    }

    /// Moves the displayed month one step. The selection is left alone.
    pub fn navigate_month(&mut self, direction: NavigationDirection) {
        let previous = self.current_date;
        self.current_date = shift_month(self.current_date, direction.month_delta());
        log::debug!(
            "Navigated {:?}: {} -> {}",
            direction,
            previous,
            self.current_date
        );
    }

    /// Shows today's month and selects today.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
        self.selected_date = Some(today);
        log::debug!("Jumped to today: {}", today);
    }

    /// Selects `date`, moving the displayed month along when needed.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.current_date = date;
    }

    pub fn clear_selection(&mut self) {
        self.selected_date = None;
    }
}
