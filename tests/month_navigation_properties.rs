// Property-based tests for month navigation
// Random dates must keep the month in range and roll the year correctly

use calendar_shell::models::calendar::CalendarState;
use calendar_shell::models::navigation::NavigationDirection;
use calendar_shell::ui_egui::views::grid_dates;
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let last = calendar_shell::utils::date::last_day_of_month(year, month);
        NaiveDate::from_ymd_opt(year, month, day.min(last)).unwrap()
    })
}

proptest! {
    /// Property: one step moves exactly one month and rolls the year at the edges
    #[test]
    fn prop_next_moves_one_month(start in any_date()) {
        let mut state = CalendarState::new(start);
        state.navigate_month(NavigationDirection::Next);

        let before = start.year() * 12 + start.month0() as i32;
        let after = state.current_date.year() * 12 + state.current_date.month0() as i32;
        prop_assert_eq!(after - before, 1);
        prop_assert!((1..=12).contains(&state.current_date.month()));
    }

    /// Property: twelve steps forward land on the same month next year
    #[test]
    fn prop_twelve_steps_is_one_year(start in any_date()) {
        let mut state = CalendarState::new(start.with_day(1).unwrap());
        for _ in 0..12 {
            state.navigate_month(NavigationDirection::Next);
        }
        prop_assert_eq!(state.current_date.year(), start.year() + 1);
        prop_assert_eq!(state.current_date.month(), start.month());
    }

    /// Property: next then previous returns to the starting month
    #[test]
    fn prop_next_then_previous_same_month(start in any_date()) {
        let mut state = CalendarState::new(start);
        state.navigate_month(NavigationDirection::Next);
        state.navigate_month(NavigationDirection::Previous);
        prop_assert_eq!(state.current_date.year(), start.year());
        prop_assert_eq!(state.current_date.month(), start.month());
        prop_assert!(state.current_date.day() <= start.day());
    }

    /// Property: the grid covers the displayed month and starts on Sunday
    #[test]
    fn prop_grid_covers_month(start in any_date()) {
        let cells = grid_dates(start);
        prop_assert_eq!(cells.len(), 42);
        prop_assert_eq!(cells[0].weekday(), Weekday::Sun);
        prop_assert!(cells.contains(&start.with_day(1).unwrap()));
        let last = calendar_shell::utils::date::last_day_of_month(start.year(), start.month());
        prop_assert!(cells.contains(&start.with_day(last).unwrap()));
    }
}
