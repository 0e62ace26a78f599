//! Parsing of civil date and time-of-day input.

use chrono::{NaiveDate, NaiveTime};

use crate::error::SearchError;

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an `HH:MM` 24-hour string into a time of day.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, SearchError> {
    let bad = || SearchError::InvalidTimeFormat(input.to_string());
    let (hh, mm) = input.split_once(':').ok_or_else(bad)?;
    if !all_digits(hh) || !all_digits(mm) {
        return Err(bad());
    }
    let hours: u32 = hh.parse().map_err(|_| bad())?;
    let minutes: u32 = mm.parse().map_err(|_| bad())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(bad)
}

/// Parse a `DD/MM/YYYY` string into a calendar date.
pub fn parse_date_dmy(input: &str) -> Result<NaiveDate, SearchError> {
    let bad = || SearchError::InvalidDateFormat(input.to_string());
    let mut parts = input.splitn(3, '/');
    let day = parts.next().filter(|s| all_digits(s)).ok_or_else(bad)?;
    let month = parts.next().filter(|s| all_digits(s)).ok_or_else(bad)?;
    let year = parts.next().filter(|s| all_digits(s)).ok_or_else(bad)?;
    let day: u32 = day.parse().map_err(|_| bad())?;
    let month: u32 = month.parse().map_err(|_| bad())?;
    let year: i32 = year.parse().map_err(|_| bad())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)
}
