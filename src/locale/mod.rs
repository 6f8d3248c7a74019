//! Localized rendering of calendar days and transaction timestamps.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DAY_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A configurable 12-entry month-name table used for history headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub month_names: [String; 12],
}

impl Locale {
    /// The original application's table: Russian month names in the genitive
    /// case, as they read after a day number.
    pub fn russian() -> Self {
        Self::from_names([
            "Января",
            "Февраля",
            "Марта",
            "Апреля",
            "Мая",
            "Июня",
            "Июля",
            "Августа",
            "Сентября",
            "Октября",
            "Ноября",
            "Декабря",
        ])
    }

    pub fn english() -> Self {
        Self::from_names([
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ])
    }

    fn from_names(names: [&str; 12]) -> Self {
        Self {
            month_names: names.map(String::from),
        }
    }

    /// Renders a calendar day as `<day> <MonthName> <year>`.
    pub fn format_day(&self, day: NaiveDate) -> String {
        let month = &self.month_names[day.month0() as usize];
        format!("{} {} {}", day.day(), month, day.year())
    }

    /// Renders a `YYYY-MM-DD` string as `<day> <MonthName> <year>`. A
    /// malformed input is echoed back unchanged, never an error.
    pub fn format_localized(&self, date_str: &str) -> String {
        match NaiveDate::parse_from_str(date_str, DAY_FORMAT) {
            Ok(day) => self.format_day(day),
            Err(_) => date_str.to_string(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::russian()
    }
}

/// Renders a full transaction timestamp as `HH:MM` for history rows,
/// soft-failing to an empty string on malformed input.
pub fn format_time(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map(|ts| ts.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_russian_dates() {
        let locale = Locale::russian();
        assert_eq!(locale.format_localized("2025-03-02"), "2 Марта 2025");
        assert_eq!(locale.format_localized("2024-12-31"), "31 Декабря 2024");
    }

    #[test]
    fn renders_english_dates() {
        let locale = Locale::english();
        assert_eq!(locale.format_localized("2025-01-09"), "9 January 2025");
    }

    #[test]
    fn malformed_date_is_echoed_unchanged() {
        let locale = Locale::default();
        assert_eq!(locale.format_localized("вчера"), "вчера");
        assert_eq!(locale.format_localized("2025-13-40"), "2025-13-40");
        assert_eq!(locale.format_localized(""), "");
    }

    #[test]
    fn formats_timestamp_as_hours_and_minutes() {
        assert_eq!(format_time("2025-03-02 14:31:08.123456"), "14:31");
        assert_eq!(format_time("2025-03-02 07:05:00"), "07:05");
    }

    #[test]
    fn malformed_timestamp_renders_empty() {
        assert_eq!(format_time("not a timestamp"), "");
        assert_eq!(format_time("2025-03-02"), "");
    }

    #[test]
    fn default_locale_is_russian() {
        assert_eq!(Locale::default(), Locale::russian());
    }
}
