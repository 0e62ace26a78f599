//! Rashi (zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal.

use crate::util::normalize_360;

/// Span of one rashi: 30 degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Determine the rashi from an ayanamsa-adjusted longitude in degrees.
///
/// `index = floor(longitude / 30)`, in [0, 11] for longitude in [0, 360).
pub fn rashi_from_longitude(adjusted_lon_deg: f64) -> Rashi {
    let lon = normalize_360(adjusted_lon_deg);
    let idx = ((lon / RASHI_SPAN_DEG).floor() as usize).min(11);
    ALL_RASHIS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn first_segment() {
        assert_eq!(rashi_from_longitude(0.0), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999), Rashi::Mesha);
    }

    #[test]
    fn segment_boundary() {
        assert_eq!(rashi_from_longitude(30.0), Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(330.0), Rashi::Meena);
    }

    #[test]
    fn wraps_negative() {
        assert_eq!(rashi_from_longitude(-15.0), Rashi::Meena);
    }

    #[test]
    fn index_always_in_bounds() {
        let mut lon = 0.0;
        while lon < 360.0 {
            assert!(rashi_from_longitude(lon).index() < 12, "lon {lon}");
            lon += 0.91;
        }
    }
}
