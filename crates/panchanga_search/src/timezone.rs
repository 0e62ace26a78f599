//! Timezone input: named IANA zones or explicit UTC offsets.

use chrono::{FixedOffset, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::SearchError;

/// Timezone input, either a named IANA zone or an explicit offset.
///
/// Both forms resolve to one fixed UTC offset for a given date before any
/// downstream computation; nothing later branches on the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezoneSpec {
    /// Named IANA zone, e.g. `Asia/Tehran`.
    Named(Tz),
    /// Explicit offset from UTC, e.g. `+03:30`.
    Offset(FixedOffset),
}

impl TimezoneSpec {
    /// Parse a timezone string.
    ///
    /// Strings starting with `+` or `-` are parsed as `[+/-]HH:MM` or
    /// `[+/-]HHMM` offsets (hours at most 14, minutes below 60); anything
    /// else is looked up as an IANA zone name.
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        if input.starts_with('+') || input.starts_with('-') {
            return parse_offset(input).map(Self::Offset);
        }
        input
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| SearchError::InvalidTimezoneIdentifier(input.to_string()))
    }

    /// The fixed UTC offset this spec resolves to on the given date.
    pub fn utc_offset_on(self, date: NaiveDate) -> FixedOffset {
        match self {
            Self::Offset(offset) => offset,
            Self::Named(tz) => tz.offset_from_utc_date(&date).fix(),
        }
    }
}

/// Parse `[+-]HH:MM` or `[+-]HHMM` into a fixed offset.
fn parse_offset(input: &str) -> Result<FixedOffset, SearchError> {
    let bad = || SearchError::InvalidTimezoneFormat(input.to_string());

    let (sign, rest) = match input.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(bad()),
    };
    let (hh, mm) = match rest.len() {
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        4 => (&rest[..2], &rest[2..]),
        _ => return Err(bad()),
    };
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let hours: i32 = hh.parse().map_err(|_| bad())?;
    let minutes: i32 = mm.parse().map_err(|_| bad())?;
    if hours > 14 || minutes > 59 {
        return Err(bad());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn offset_with_colon() {
        let spec = TimezoneSpec::parse("+03:30").unwrap();
        assert_eq!(
            spec.utc_offset_on(date(2024, 1, 1)),
            FixedOffset::east_opt(3 * 3600 + 30 * 60).unwrap()
        );
    }

    #[test]
    fn offset_without_colon() {
        let spec = TimezoneSpec::parse("-0500").unwrap();
        assert_eq!(
            spec.utc_offset_on(date(2024, 1, 1)),
            FixedOffset::east_opt(-5 * 3600).unwrap()
        );
    }

    #[test]
    fn offset_out_of_range() {
        assert!(matches!(
            TimezoneSpec::parse("+15:00"),
            Err(SearchError::InvalidTimezoneFormat(_))
        ));
        assert!(matches!(
            TimezoneSpec::parse("+03:75"),
            Err(SearchError::InvalidTimezoneFormat(_))
        ));
    }

    #[test]
    fn offset_malformed() {
        for bad in ["+3:30", "+03:3", "+ab:cd", "-", "+12345"] {
            assert!(
                matches!(
                    TimezoneSpec::parse(bad),
                    Err(SearchError::InvalidTimezoneFormat(_))
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn named_zone_resolves() {
        let spec = TimezoneSpec::parse("Asia/Tehran").unwrap();
        assert_eq!(
            spec.utc_offset_on(date(2024, 1, 1)),
            FixedOffset::east_opt(3 * 3600 + 30 * 60).unwrap()
        );
    }

    #[test]
    fn named_zone_tracks_dst() {
        let spec = TimezoneSpec::parse("America/New_York").unwrap();
        let winter = spec.utc_offset_on(date(2024, 1, 15));
        let summer = spec.utc_offset_on(date(2024, 7, 15));
        assert_eq!(winter, FixedOffset::east_opt(-5 * 3600).unwrap());
        assert_eq!(summer, FixedOffset::east_opt(-4 * 3600).unwrap());
    }

    #[test]
    fn unknown_name_rejected() {
        assert!(matches!(
            TimezoneSpec::parse("Nowhere/Special"),
            Err(SearchError::InvalidTimezoneIdentifier(_))
        ));
    }
}
