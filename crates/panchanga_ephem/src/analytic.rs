//! Low-precision analytic ephemeris.
//!
//! Self-contained Sun/Moon positions from standard truncated series (mean
//! elements plus the principal periodic terms) and hour-angle rise/set
//! computation from the fundamental spherical-astronomy formulas.
//!
//! Accuracy is on the order of arcminutes for the Sun, a fraction of a
//! degree for the Moon, and a minute or two for rise/set times: enough for
//! calendar classification, far from ephemeris grade.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::EphemerisError;
use crate::provider::EphemerisProvider;
use crate::types::{EphemerisSample, GeoLocation};

/// Julian Date of the J2000.0 epoch.
const J2000_JD: f64 = 2451545.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
const OBLIQUITY_DEG: f64 = 23.4397;

/// Argument of perihelion of the Earth-Sun orbit in degrees.
const EARTH_PERIHELION_DEG: f64 = 102.9372;

/// Julian Date (UT) of a UTC instant, to millisecond resolution.
pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 86_400_000.0 + UNIX_EPOCH_JD
}

/// UTC instant for a Julian Date (UT), to millisecond resolution.
pub fn datetime_from_jd(jd: f64) -> DateTime<Utc> {
    let millis = ((jd - UNIX_EPOCH_JD) * 86_400_000.0).round() as i64;
    DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(millis)
}

/// Wrap an angle to [0, 360) degrees.
fn wrap360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Sun's mean anomaly in degrees at `d` days since J2000.0.
fn sun_mean_anomaly(d: f64) -> f64 {
    wrap360(357.5291 + 0.985_600_28 * d)
}

/// Equation of center for the Sun, in degrees.
fn sun_center(mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()
}

/// Sun's geocentric ecliptic longitude in degrees at a Julian Date (UT).
fn sun_ecliptic_longitude(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let mean_anomaly = sun_mean_anomaly(d);
    wrap360(mean_anomaly + sun_center(mean_anomaly) + 180.0 + EARTH_PERIHELION_DEG)
}

/// Moon's geocentric ecliptic longitude and latitude in degrees at a
/// Julian Date (UT). Mean elements plus the principal equation-of-center
/// and latitude terms.
fn moon_ecliptic_lon_lat(jd: f64) -> (f64, f64) {
    let d = jd - J2000_JD;
    let mean_longitude = wrap360(218.316 + 13.176_396 * d);
    let mean_anomaly = wrap360(134.963 + 13.064_993 * d);
    let latitude_argument = wrap360(93.272 + 13.229_350 * d);
    let lon = wrap360(mean_longitude + 6.289 * mean_anomaly.to_radians().sin());
    let lat = 5.128 * latitude_argument.to_radians().sin();
    (lon, lat)
}

/// Convert ecliptic (longitude, latitude) in degrees to equatorial right
/// ascension in hours, [0, 24).
fn ecliptic_to_ra_hours(lon_deg: f64, lat_deg: f64) -> f64 {
    let eps = OBLIQUITY_DEG.to_radians();
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    wrap360(ra.to_degrees()) / 15.0
}

/// Reference ephemeris provider from closed-form low-precision series.
///
/// Positions are geocentric; the observer location does not enter the
/// position model, only the rise/set computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    /// Create the analytic provider.
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn positions(
        &self,
        instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<EphemerisSample, EphemerisError> {
        let jd = julian_date(instant);
        let sun_lon = sun_ecliptic_longitude(jd);
        let (moon_lon, moon_lat) = moon_ecliptic_lon_lat(jd);
        Ok(EphemerisSample {
            sun_ra_hours: ecliptic_to_ra_hours(sun_lon, 0.0),
            moon_ra_hours: ecliptic_to_ra_hours(moon_lon, moon_lat),
            moon_phase_deg: wrap360(moon_lon - sun_lon),
            julian_date: jd,
        })
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        horizon_deg: f64,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), EphemerisError> {
        let jd_midnight = julian_date(date.and_time(NaiveTime::MIN).and_utc());
        // Approximate local solar noon from the longitude, then correct
        // for the equation of time.
        let noon_guess = jd_midnight + 0.5 - location.longitude_deg / 360.0;
        let d = noon_guess - J2000_JD;
        let mean_anomaly = sun_mean_anomaly(d);
        let ecl_lon = wrap360(mean_anomaly + sun_center(mean_anomaly) + 180.0 + EARTH_PERIHELION_DEG);
        let m_rad = mean_anomaly.to_radians();
        let l_rad = ecl_lon.to_radians();
        let jd_transit = noon_guess + 0.0053 * m_rad.sin() - 0.0069 * (2.0 * l_rad).sin();

        // Solar declination, then the hour angle at the target altitude.
        let sin_dec = l_rad.sin() * OBLIQUITY_DEG.to_radians().sin();
        let dec = sin_dec.asin();
        let phi = location.latitude_rad();
        let cos_hour_angle =
            (horizon_deg.to_radians().sin() - phi.sin() * sin_dec) / (phi.cos() * dec.cos());
        if cos_hour_angle > 1.0 {
            return Err(EphemerisError::NeverRises);
        }
        if cos_hour_angle < -1.0 {
            return Err(EphemerisError::NeverSets);
        }

        let half_arc_days = cos_hour_angle.acos().to_degrees() / 360.0;
        Ok((
            datetime_from_jd(jd_transit - half_arc_days),
            datetime_from_jd(jd_transit + half_arc_days),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap360_range() {
        assert!((wrap360(-30.0) - 330.0).abs() < 1e-12);
        assert!((wrap360(400.0) - 40.0).abs() < 1e-12);
        assert_eq!(wrap360(0.0), 0.0);
    }

    #[test]
    fn ra_of_equinox_point_is_zero() {
        assert!(ecliptic_to_ra_hours(0.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn ra_of_solstice_point_is_six_hours() {
        assert!((ecliptic_to_ra_hours(90.0, 0.0) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn sun_longitude_near_zero_at_march_equinox() {
        // 2024 March equinox: 2024-03-20 03:06 UTC.
        let jd = 2460389.6292;
        let lon = sun_ecliptic_longitude(jd);
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.5, "sun longitude at equinox = {lon}");
    }
}
