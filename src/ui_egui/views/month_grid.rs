use crate::models::calendar::CalendarState;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{first_of_month, WEEKDAY_SHORT_LABELS};
use chrono::{Datelike, Duration, NaiveDate};
use egui::RichText;

/// Six weeks of seven days
pub const GRID_CELLS: usize = 42;

/// Dates shown for the month of `displayed`, starting on the Sunday on or
/// before the first of the month.
pub fn grid_dates(displayed: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(displayed);
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);
    start.iter_days().take(GRID_CELLS).collect()
}

pub struct MonthGrid<'a> {
    state: &'a CalendarState,
    theme: &'a CalendarTheme,
    today: NaiveDate,
}

impl<'a> MonthGrid<'a> {
    pub fn new(state: &'a CalendarState, theme: &'a CalendarTheme, today: NaiveDate) -> Self {
        Self {
            state,
            theme,
            today,
        }
    }

    /// Renders the grid and returns the day the user clicked, if any.
    pub fn show(&self, ui: &mut egui::Ui) -> Option<NaiveDate> {
        let displayed_month = self.state.current_date.month();
        let cell_width = (ui.available_width() / 7.0 - 4.0).max(24.0);
        let mut clicked = None;

        egui::Grid::new("month_grid")
            .num_columns(7)
            .spacing([4.0, 4.0])
            .min_col_width(cell_width)
            .show(ui, |ui| {
                for (index, name) in WEEKDAY_SHORT_LABELS.iter().enumerate() {
                    let color = self.theme.weekday_text(index as u32);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(*name).small().color(color));
                    });
                }
                ui.end_row();

                for week in grid_dates(self.state.current_date).chunks(7) {
                    for &day in week {
                        let in_month = day.month() == displayed_month;
                        let is_selected = self.state.selected_date == Some(day);

                        let mut text = RichText::new(day.day().to_string());
                        text = if !in_month {
                            text.color(self.theme.text_secondary)
                        } else {
                            text.color(self.theme.weekday_text(day.weekday().num_days_from_sunday()))
                        };
                        if day == self.today {
                            text = text.strong().underline().color(self.theme.today_border);
                        }

                        let response = ui
                            .vertical_centered(|ui| ui.selectable_label(is_selected, text))
                            .inner;
                        if response.clicked() {
                            clicked = Some(day);
                        }
                    }
                    ui.end_row();
                }
            });

        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_starts_on_sunday() {
        // 2025-01-01 is a Wednesday
        let cells = grid_dates(date(2025, 1, 15));
        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0], date(2024, 12, 29));
        assert_eq!(cells[0].weekday(), Weekday::Sun);
        assert_eq!(cells[3], date(2025, 1, 1));
    }

    #[test]
    fn test_grid_when_month_starts_on_sunday() {
        // 2025-06-01 is a Sunday
        let cells = grid_dates(date(2025, 6, 20));
        assert_eq!(cells[0], date(2025, 6, 1));
        assert_eq!(cells[41], date(2025, 7, 12));
    }

    #[test]
    fn test_grid_contains_whole_month() {
        let cells = grid_dates(date(2025, 3, 1));
        for day in 1..=31 {
            assert!(cells.contains(&date(2025, 3, day)), "missing March {}", day);
        }
    }
}
