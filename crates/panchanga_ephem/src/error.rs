//! Error types for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from an ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The Sun stays below the horizon for the whole day (polar night).
    NeverRises,
    /// The Sun stays above the horizon for the whole day (midnight sun).
    NeverSets,
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeverRises => write!(f, "sun never rises at this location on this date"),
            Self::NeverSets => write!(f, "sun never sets at this location on this date"),
        }
    }
}

impl Error for EphemerisError {}
