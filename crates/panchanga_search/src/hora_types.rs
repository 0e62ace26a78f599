//! Types for planetary-hour partitioning.

use chrono::{DateTime, FixedOffset};

use panchanga_base::Planet;

/// Day or night half of the diurnal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoraPeriod {
    /// Sunrise to sunset.
    Day,
    /// Sunset to the next sunrise.
    Night,
}

impl HoraPeriod {
    /// Name of the period.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

/// One planetary hour: a twelfth of the day or of the night.
///
/// Instants carry the resolved UTC offset plus the local-mean-time
/// correction for the longitude, so consecutive horas share boundaries
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hora {
    /// Start of the hora (inclusive).
    pub start: DateTime<FixedOffset>,
    /// End of the hora (exclusive).
    pub end: DateTime<FixedOffset>,
    /// Ruling planet.
    pub planet: Planet,
    /// Day or night half of the cycle.
    pub period: HoraPeriod,
}
