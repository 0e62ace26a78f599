//! Six-field panchanga classification of a single instant.

use chrono::{DateTime, Utc};

use panchanga_base::{
    Karana, Nakshatra, Paksha, Rashi, Tithi, Yoga, ayanamsa_deg, karana_from_phase,
    nakshatra_from_longitude, normalize_360, paksha_from_phase, rashi_from_longitude,
    tithi_from_phase, yoga_from_sum,
};
use panchanga_ephem::{EphemerisProvider, REFERENCE_OBSERVER};

use crate::error::SearchError;

/// Degrees per hour of right ascension.
const RA_HOURS_TO_DEG: f64 = 15.0;

/// Immutable classification of one instant into the six panchanga fields.
///
/// A fresh value is computed per query instant and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanchangaClassification {
    /// Tithi (lunar day), one of 30.
    pub tithi: Tithi,
    /// Paksha (waxing or waning half).
    pub paksha: Paksha,
    /// Nakshatra (lunar mansion), one of 27.
    pub nakshatra: Nakshatra,
    /// Yoga (luni-solar yoga), one of 27.
    pub yoga: Yoga,
    /// Karana (half-tithi), one of 11.
    pub karana: Karana,
    /// Rashi (zodiac sign of the Moon), one of 12.
    pub rashi: Rashi,
}

/// Classify one instant into the six panchanga fields.
///
/// Queries the provider at the canonical reference observer so the
/// right-ascension and phase values are geocentric-equivalent, converts
/// the right ascensions to degrees (x15), applies the ayanamsa for the
/// sample's Julian date, and runs the segment lookups on the normalized
/// adjusted longitudes.
///
/// Provider outputs are a precondition: they are assumed finite and in
/// their documented ranges, not re-validated here.
pub fn classify<P>(
    provider: &P,
    instant: DateTime<Utc>,
) -> Result<PanchangaClassification, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let sample = provider.positions(instant, &REFERENCE_OBSERVER)?;
    let ayanamsa = ayanamsa_deg(sample.julian_date);

    let sun_long = sample.sun_ra_hours * RA_HOURS_TO_DEG;
    let moon_long = sample.moon_ra_hours * RA_HOURS_TO_DEG;
    let moon_adjusted = normalize_360(moon_long + ayanamsa);
    let sun_adjusted = normalize_360(sun_long + ayanamsa);

    Ok(PanchangaClassification {
        tithi: tithi_from_phase(sample.moon_phase_deg),
        paksha: paksha_from_phase(sample.moon_phase_deg),
        nakshatra: nakshatra_from_longitude(moon_adjusted),
        yoga: yoga_from_sum(normalize_360(moon_adjusted + sun_adjusted)),
        karana: karana_from_phase(sample.moon_phase_deg),
        rashi: rashi_from_longitude(moon_adjusted),
    })
}
