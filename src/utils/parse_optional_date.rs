use crate::constants::{DATE_FORMATS, DATE_TIME_FORMATS};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a date cell, returning `None` instead of an error for anything unrecognized.
///
/// Plain dates are tried first, then date-times (the time part is dropped), then RFC 3339.
pub fn parse_optional_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_optional_date("2024-01-02"), ymd(2024, 1, 2));
        assert_eq!(parse_optional_date(" 2024/01/02 "), ymd(2024, 1, 2));
    }

    #[test]
    fn test_spreadsheet_style_dates() {
        assert_eq!(parse_optional_date("1/2/2024"), ymd(2024, 1, 2));
        assert_eq!(parse_optional_date("02-Jan-2024"), ymd(2024, 1, 2));
        assert_eq!(parse_optional_date("Jan 02, 2024"), ymd(2024, 1, 2));
    }

    #[test]
    fn test_date_times_keep_the_date() {
        assert_eq!(parse_optional_date("2024-01-02 15:00:00"), ymd(2024, 1, 2));
        assert_eq!(parse_optional_date("2024-01-02T15:00:00+05:45"), ymd(2024, 1, 2));
    }

    #[test]
    fn test_invalid_values_are_none() {
        assert_eq!(parse_optional_date(""), None);
        assert_eq!(parse_optional_date("yesterday"), None);
        assert_eq!(parse_optional_date("2024-02-30"), None);
    }
}
