//! Error types for classification, window search, and partitioning.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_ephem::EphemerisError;

/// Errors from the classification, scan, and partition drivers.
///
/// All variants are detected synchronously and surfaced immediately; the
/// domain is deterministic arithmetic, so nothing is retried.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Activity key not present in the rule registry.
    UnknownActivity(String),
    /// Scan step must be positive.
    InvalidStep(f64),
    /// Malformed HH:MM time-of-day string.
    InvalidTimeFormat(String),
    /// Malformed DD/MM/YYYY date string.
    InvalidDateFormat(String),
    /// Malformed [+/-]HH:MM or [+/-]HHMM offset string.
    InvalidTimezoneFormat(String),
    /// Named timezone not present in the IANA database.
    InvalidTimezoneIdentifier(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::UnknownActivity(key) => write!(f, "unknown activity type: {key}"),
            Self::InvalidStep(step) => write!(f, "scan step must be positive, got {step}"),
            Self::InvalidTimeFormat(s) => {
                write!(f, "invalid time format: {s} (use HH:MM)")
            }
            Self::InvalidDateFormat(s) => {
                write!(f, "invalid date format: {s} (use DD/MM/YYYY)")
            }
            Self::InvalidTimezoneFormat(s) => {
                write!(f, "invalid timezone format: {s} (use [+/-]HH:MM)")
            }
            Self::InvalidTimezoneIdentifier(s) => {
                write!(f, "invalid timezone identifier: {s}")
            }
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
