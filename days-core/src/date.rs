//! Calendar dates in strict `YYYY-MM-DD` form.
//!
//! A `DateValue` only exists if it names a real day in the proleptic Gregorian
//! calendar. There is no time-of-day and no time zone.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{DaysError, DaysResult};

/// Length of the only accepted textual shape, `YYYY-MM-DD`.
const DATE_TEXT_LEN: usize = "YYYY-MM-DD".len();

/// A validated calendar date, ordered by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Build a date from its components, failing for impossible days
    /// such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The current local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse a date in `YYYY-MM-DD` shape.
    ///
    /// The text must be exactly ten characters long and split on `-` into
    /// three all-digit fields. Month and day do not have to be zero-padded
    /// as long as the total length still comes out at ten (`2024-1-011`
    /// is the 11th of January).
    pub fn parse(text: &str) -> DaysResult<Self> {
        let malformed = || DaysError::MalformedDate(text.to_string());

        if text.len() != DATE_TEXT_LEN {
            return Err(malformed());
        }

        let parts: Vec<&str> = text.split('-').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }

        let year: i32 = parse_field(parts[0]).ok_or_else(malformed)?;
        let month: u32 = parse_field(parts[1]).ok_or_else(malformed)?;
        let day: u32 = parse_field(parts[2]).ok_or_else(malformed)?;

        Self::from_ymd(year, month, day).ok_or_else(malformed)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Signed number of days from `self` to `later`.
    ///
    /// Positive when `later` falls after `self`, negative when before.
    pub fn days_until(&self, later: &DateValue) -> i64 {
        (later.0 - self.0).num_days()
    }
}

/// Signed number of days from `a` to `b`.
pub fn days_between(a: &DateValue, b: &DateValue) -> i64 {
    a.days_until(b)
}

/// Parse one numeric field. Signs, blanks and stray characters are rejected.
fn parse_field<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for DateValue {
    type Err = DaysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateValue {
        DateValue::from_ymd(y, m, d).unwrap()
    }

    // --- parse ---

    #[test]
    fn parses_padded_dates() {
        assert_eq!(DateValue::parse("2024-06-15").unwrap(), date(2024, 6, 15));
        assert_eq!(DateValue::parse("1999-12-31").unwrap(), date(1999, 12, 31));
    }

    #[test]
    fn parses_leap_day_only_in_leap_years() {
        assert!(DateValue::parse("2024-02-29").is_ok());
        assert!(DateValue::parse("2000-02-29").is_ok());
        assert!(DateValue::parse("2023-02-29").is_err());
        assert!(DateValue::parse("1900-02-29").is_err());
    }

    #[test]
    fn accepts_unpadded_fields_when_length_is_ten() {
        assert_eq!(DateValue::parse("2024-1-011").unwrap(), date(2024, 1, 11));
        assert_eq!(DateValue::parse("02024-1-15").unwrap(), date(2024, 1, 15));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(DateValue::parse("2024-13-01").is_err());
        assert!(DateValue::parse("2024-00-10").is_err());
        assert!(DateValue::parse("2024-02-30").is_err());
        assert!(DateValue::parse("2024-04-31").is_err());
        assert!(DateValue::parse("2024-01-00").is_err());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(DateValue::parse("not-a-date").is_err());
        assert!(DateValue::parse("2024-6-15").is_err());
        assert!(DateValue::parse("2024-06-150").is_err());
        assert!(DateValue::parse("").is_err());
        assert!(DateValue::parse("2024/06/15").is_err());
        assert!(DateValue::parse("2024-06-1-").is_err());
        assert!(DateValue::parse("20240615ab").is_err());
    }

    #[test]
    fn rejects_signs_and_blanks() {
        assert!(DateValue::parse("2024-+6-15").is_err());
        assert!(DateValue::parse("2024- 6-15").is_err());
    }

    #[test]
    fn malformed_error_carries_input() {
        match DateValue::parse("bad-date") {
            Err(DaysError::MalformedDate(raw)) => assert_eq!(raw, "bad-date"),
            other => panic!("expected MalformedDate, got {other:?}"),
        }
    }

    // --- format ---

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(date(2024, 1, 5).to_string(), "2024-01-05");
        assert_eq!(date(987, 3, 9).to_string(), "0987-03-09");
        assert_eq!(date(12345, 11, 30).to_string(), "12345-11-30");
    }

    #[test]
    fn format_then_parse_is_identity() {
        for d in [date(2024, 2, 29), date(1970, 1, 1), date(2099, 12, 31), date(1000, 7, 4)] {
            assert_eq!(DateValue::parse(&d.to_string()).unwrap(), d);
        }
    }

    // --- days_between ---

    #[test]
    fn same_day_is_zero() {
        let d = date(2024, 6, 15);
        assert_eq!(days_between(&d, &d), 0);
    }

    #[test]
    fn crosses_leap_february() {
        assert_eq!(days_between(&date(2024, 1, 1), &date(2024, 3, 1)), 60);
        assert_eq!(days_between(&date(2023, 1, 1), &date(2023, 3, 1)), 59);
    }

    #[test]
    fn is_antisymmetric() {
        let a = date(2023, 12, 25);
        let b = date(2024, 6, 15);
        assert_eq!(days_between(&a, &b), -days_between(&b, &a));
        assert_eq!(days_between(&a, &b), 173);
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(days_between(&date(2024, 12, 31), &date(2025, 1, 1)), 1);
        assert_eq!(days_between(&date(2025, 1, 1), &date(2024, 12, 31)), -1);
    }

    // --- ordering ---

    #[test]
    fn orders_by_year_month_day() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
        assert!(date(2024, 2, 2) >= date(2024, 2, 2));
    }
}
