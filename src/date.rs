//! Start date composition from separate day, month and year pickers.
//!
//! Dates travel to the backend as UTC-midnight ISO-8601 timestamps
//! (`2024-02-29T00:00:00.000Z`). Local time zones are never consulted.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Canonical month names, used both for display and exact-match parsing.
pub const MONTHS: [&str; 12] = [
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
];

/// Accepted day-of-month values.
pub const DAY_RANGE: RangeInclusive<u32> = 1..=31;

/// Accepted years (four digits).
pub const YEAR_RANGE: RangeInclusive<i32> = 1000..=9999;

/// Number of years offered by the year picker.
pub const YEAR_OPTION_COUNT: i32 = 51;

/// Date composition and parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid month selection: {0}")]
    UnknownMonth(String),

    #[error("Invalid date combination ({month} {day}, {year})")]
    ImpossibleDate { day: u32, month: String, year: i32 },

    #[error("Invalid date format: {0:?}")]
    Unparseable(String),
}

/// A start date split into picker fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: &'static str,
    pub year: i32,
}

/// Zero-based index of a canonical month name (case-sensitive).
pub fn month_index(name: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == name)
}

/// Build the UTC-midnight timestamp for `day month year`.
pub fn compose(day: u32, month: &str, year: i32) -> Result<String, DateError> {
    let index = month_index(month).ok_or_else(|| DateError::UnknownMonth(month.to_string()))?;
    let impossible = || DateError::ImpossibleDate {
        day,
        month: month.to_string(),
        year,
    };

    if !DAY_RANGE.contains(&day) || !YEAR_RANGE.contains(&year) {
        return Err(impossible());
    }

    // month0 < 12, so the cast cannot truncate
    let date = NaiveDate::from_ymd_opt(year, index as u32 + 1, day).ok_or_else(impossible)?;
    let instant = date.and_time(NaiveTime::MIN).and_utc();

    // Components must survive the round trip unchanged
    if instant.year() != year || instant.month0() as usize != index || instant.day() != day {
        return Err(impossible());
    }

    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Split a stored timestamp back into picker fields (UTC components).
pub fn decompose(timestamp: &str) -> Result<DateParts, DateError> {
    let instant = parse_timestamp(timestamp).ok_or_else(|| DateError::Unparseable(timestamp.to_string()))?;
    let month = MONTHS
        .get(instant.month0() as usize)
        .copied()
        .ok_or_else(|| DateError::Unparseable(timestamp.to_string()))?;

    Ok(DateParts {
        day: instant.day(),
        month,
        year: instant.year(),
    })
}

/// Parse a backend timestamp as an instant.
///
/// Accepts RFC 3339 with any offset. Offset-less date-times and bare dates
/// are read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Years offered by the picker, newest first, ending at `current_year`.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..YEAR_OPTION_COUNT).map(|offset| current_year - offset).collect()
}

/// Current UTC calendar year.
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_formats_utc_midnight() {
        assert_eq!(compose(15, "March", 2021).unwrap(), "2021-03-15T00:00:00.000Z");
        assert_eq!(compose(1, "January", 2020).unwrap(), "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_february_limits() {
        assert!(compose(29, "February", 2024).is_ok());
        assert!(matches!(
            compose(29, "February", 2023),
            Err(DateError::ImpossibleDate { .. })
        ));
        assert!(matches!(
            compose(30, "February", 2024),
            Err(DateError::ImpossibleDate { .. })
        ));
    }

    #[test]
    fn test_thirty_day_months_reject_31() {
        for month in ["April", "June", "September", "November"] {
            assert!(matches!(compose(31, month, 2024), Err(DateError::ImpossibleDate { .. })));
            assert!(compose(30, month, 2024).is_ok());
        }
    }

    #[test]
    fn test_unknown_month() {
        assert_eq!(
            compose(15, "Smarch", 2024),
            Err(DateError::UnknownMonth("Smarch".to_string()))
        );
        // Exact, case-sensitive match only
        assert!(matches!(compose(15, "march", 2024), Err(DateError::UnknownMonth(_))));
        assert!(matches!(compose(15, "Mar", 2024), Err(DateError::UnknownMonth(_))));
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(matches!(compose(0, "May", 2024), Err(DateError::ImpossibleDate { .. })));
        assert!(matches!(compose(32, "May", 2024), Err(DateError::ImpossibleDate { .. })));
        assert!(matches!(compose(1, "May", 999), Err(DateError::ImpossibleDate { .. })));
        assert!(matches!(compose(1, "May", 10000), Err(DateError::ImpossibleDate { .. })));
    }

    #[test]
    fn test_decompose_inverts_compose_for_every_day() {
        let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        while date < end {
            let month = MONTHS[date.month0() as usize];
            let ts = compose(date.day(), month, date.year()).unwrap();
            let parts = decompose(&ts).unwrap();
            assert_eq!((parts.day, parts.month, parts.year), (date.day(), month, date.year()));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_decompose_uses_utc_components() {
        // 23:30 at -05:00 is already the next day in UTC
        let parts = decompose("2024-03-09T23:30:00-05:00").unwrap();
        assert_eq!(
            parts,
            DateParts {
                day: 10,
                month: "March",
                year: 2024
            }
        );
    }

    #[test]
    fn test_decompose_offsetless_and_bare_dates() {
        let parts = decompose("2019-07-04T00:00:00").unwrap();
        assert_eq!((parts.day, parts.month, parts.year), (4, "July", 2019));

        let parts = decompose("2019-07-04T00:00:00.123").unwrap();
        assert_eq!((parts.day, parts.month, parts.year), (4, "July", 2019));

        let parts = decompose("2019-12-31").unwrap();
        assert_eq!((parts.day, parts.month, parts.year), (31, "December", 2019));
    }

    #[test]
    fn test_decompose_rejects_garbage() {
        assert!(matches!(decompose("not a date"), Err(DateError::Unparseable(_))));
        assert!(matches!(decompose(""), Err(DateError::Unparseable(_))));
        assert!(matches!(decompose("2024-02-30T00:00:00Z"), Err(DateError::Unparseable(_))));
    }

    #[test]
    fn test_year_options() {
        let years = year_options(2026);
        assert_eq!(years.len(), 51);
        assert_eq!(years.first(), Some(&2026));
        assert_eq!(years.last(), Some(&1976));
    }
}
