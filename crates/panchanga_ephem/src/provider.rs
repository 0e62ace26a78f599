//! The ephemeris provider trait.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::EphemerisError;
use crate::types::{EphemerisSample, GeoLocation};

/// External ephemeris source consumed by the classification and
/// partitioning drivers.
///
/// Implementations supply Sun/Moon right ascension, the lunar phase angle,
/// the Julian date, and daily sunrise/sunset instants. Outputs are
/// expected to be finite and within their documented ranges; consumers do
/// not re-validate them.
pub trait EphemerisProvider {
    /// Sun/Moon positions and phase at `instant`, as seen from `location`.
    fn positions(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<EphemerisSample, EphemerisError>;

    /// Sunrise and sunset instants (UTC) on the given UT calendar `date`
    /// at `location`, for a horizon altitude of `horizon_deg` (negative
    /// is below the geometric horizon).
    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        horizon_deg: f64,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), EphemerisError>;
}
