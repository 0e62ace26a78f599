//! Observer and sample types for ephemeris queries.

/// Horizon altitude in degrees for sunrise/sunset and reference-observer
/// queries: -0 deg 34', the standard refraction depression at the horizon.
pub const HORIZON_DEG: f64 = -(34.0 / 60.0);

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Canonical reference observer: equator, prime meridian, sea level.
///
/// Position queries use it to obtain consistent geocentric-equivalent
/// right-ascension and phase values; it does not model a real vantage
/// point.
pub const REFERENCE_OBSERVER: GeoLocation = GeoLocation {
    latitude_deg: 0.0,
    longitude_deg: 0.0,
    altitude_m: 0.0,
};

/// Scalar outputs of a position query at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    /// Sun's right ascension in hours, [0, 24).
    pub sun_ra_hours: f64,
    /// Moon's right ascension in hours, [0, 24).
    pub moon_ra_hours: f64,
    /// Lunar phase angle in degrees, [0, 360): 0 at new moon, 180 at full.
    pub moon_phase_deg: f64,
    /// Julian Date (UT) of the query instant.
    pub julian_date: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_is_34_arcmin_below() {
        assert!((HORIZON_DEG + 0.566_666).abs() < 1e-3);
    }

    #[test]
    fn reference_observer_at_origin() {
        assert_eq!(REFERENCE_OBSERVER.latitude_deg, 0.0);
        assert_eq!(REFERENCE_OBSERVER.longitude_deg, 0.0);
        assert_eq!(REFERENCE_OBSERVER.altitude_m, 0.0);
    }

    #[test]
    fn geolocation_radians() {
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 77.209_f64.to_radians()).abs() < 1e-15);
    }
}
