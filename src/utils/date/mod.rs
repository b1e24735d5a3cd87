// Date utility functions
// Korean month/weekday labels and month arithmetic

use chrono::{Datelike, NaiveDate};

/// Month labels indexed by zero-based month.
pub const MONTH_LABELS: [&str; 12] = [
    "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
];

/// Weekday labels indexed by days from Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];

/// Single-character weekday headers for the month grid, Sunday first.
pub const WEEKDAY_SHORT_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Label for a zero-based month index, `None` outside 0..=11.
pub fn month_label(month0: u32) -> Option<&'static str> {
    MONTH_LABELS.get(month0 as usize).copied()
}

/// "2025년 3월"
pub fn year_month_title(date: NaiveDate) -> String {
    // month0() is always in 0..=11 for a NaiveDate
    let month = month_label(date.month0()).unwrap_or_default();
    format!("{}년 {}", date.year(), month)
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// "2025년 1월 1일"
pub fn full_date_label(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// Moves `current` by `delta_months`, rolling the year and clamping the day
/// to the length of the target month.
pub fn shift_month(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + current.month0() as i32 + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(last_day_of_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(0, "1월")]
    #[test_case(2, "3월")]
    #[test_case(9, "10월")]
    #[test_case(11, "12월")]
    fn test_month_label_table(month0: u32, expected: &str) {
        assert_eq!(month_label(month0), Some(expected));
    }

    #[test]
    fn test_month_label_out_of_range() {
        assert_eq!(month_label(12), None);
        assert_eq!(month_label(u32::MAX), None);
    }

    #[test]
    fn test_year_month_title() {
        assert_eq!(year_month_title(date(2025, 3, 15)), "2025년 3월");
        assert_eq!(year_month_title(date(1999, 12, 31)), "1999년 12월");
    }

    #[test_case(date(2025, 1, 1), "수요일")]
    #[test_case(date(2025, 1, 5), "일요일")]
    #[test_case(date(2025, 1, 4), "토요일")]
    #[test_case(date(2024, 2, 29), "목요일")]
    fn test_weekday_label(day: NaiveDate, expected: &str) {
        assert_eq!(weekday_label(day), expected);
    }

    #[test]
    fn test_full_date_label_has_no_padding() {
        assert_eq!(full_date_label(date(2025, 1, 1)), "2025년 1월 1일");
        assert_eq!(full_date_label(date(2025, 11, 30)), "2025년 11월 30일");
    }

    #[test]
    fn test_shift_month_rolls_year() {
        assert_eq!(shift_month(date(2025, 12, 10), 1), date(2026, 1, 10));
        assert_eq!(shift_month(date(2025, 1, 10), -1), date(2024, 12, 10));
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2025, 3, 31), -1), date(2025, 2, 28));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2025, 2), 28);
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2025, 12), 31);
        assert_eq!(last_day_of_month(2025, 4), 30);
    }
}
