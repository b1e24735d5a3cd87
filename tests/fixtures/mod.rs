// Test fixtures - reusable test data
// Provides consistent dates and settings files across integration tests

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Mar 15, 2025, the month shown in the header examples
    pub fn mar_15_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    /// Jan 1, 2025 (a Wednesday)
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Jan 31, 2025, for day clamping into February
    pub fn jan_31_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    /// Dec 31, 2025, for year roll-over
    pub fn dec_31_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample settings files
pub mod settings_files {
    pub const DARK_PER_DESTINATION: &str = r#"
theme = "dark"
signal_routing = "per_destination"
window_width = 480.0
window_height = 800.0
show_toasts = false
"#;

    pub const INVALID_WINDOW: &str = r#"
window_width = 100.0
"#;

    pub const MALFORMED: &str = "theme = ";
}
