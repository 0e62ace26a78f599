//! Ayanamsa (precession correction) for the sidereal zodiac.
//!
//! The ayanamsa is the angular offset between the tropical zodiac, anchored
//! to the vernal equinox, and the sidereal zodiac, anchored to the fixed
//! stars. The equinox precesses, so the offset is a function of epoch. The
//! polynomial here is the Lahiri-style fit used by the Indian calendar
//! tradition, expressed in Julian centuries since J2000.0.

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2451545.0;

/// Convert a Julian Date to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

/// Ayanamsa in degrees at a given Julian Date.
///
/// `ayanamsa(jd) = 23.452294 - 0.0130125 t - 0.00000164 t^2 + 0.000000503 t^3`
///
/// where `t` is Julian centuries since J2000.0. Pure and total; the result
/// is not normalized. Callers normalize after adding it to a tropical
/// longitude.
pub fn ayanamsa_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    23.452294 - 0.0130125 * t - 0.00000164 * t * t + 0.000000503 * t * t * t
}
