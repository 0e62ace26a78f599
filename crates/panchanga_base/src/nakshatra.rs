//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, indexed from Ashwini at 0 deg sidereal.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revathi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardhra,
    Punarvasu,
    Pushya,
    Ashlesa,
    Magha,
    PoorvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swathi,
    Vishaka,
    Anuradha,
    Jyeshta,
    Mula,
    PoorvaAshada,
    UttaraAshada,
    Sravana,
    Dhanishta,
    Shatabisha,
    PoorvaBhadra,
    UttaraBhadra,
    Revathi,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revathi).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardhra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesa,
    Nakshatra::Magha,
    Nakshatra::PoorvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swathi,
    Nakshatra::Vishaka,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshta,
    Nakshatra::Mula,
    Nakshatra::PoorvaAshada,
    Nakshatra::UttaraAshada,
    Nakshatra::Sravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabisha,
    Nakshatra::PoorvaBhadra,
    Nakshatra::UttaraBhadra,
    Nakshatra::Revathi,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardhra => "Ardhra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesa => "Ashlesa",
            Self::Magha => "Magha",
            Self::PoorvaPhalguni => "Poorva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swathi => "Swathi",
            Self::Vishaka => "Vishaka",
            Self::Anuradha => "Anuradha",
            Self::Jyeshta => "Jyeshta",
            Self::Mula => "Mula",
            Self::PoorvaAshada => "Poorva Ashada",
            Self::UttaraAshada => "Uttara Ashada",
            Self::Sravana => "Sravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabisha => "Shatabisha",
            Self::PoorvaBhadra => "Poorva Bhadra",
            Self::UttaraBhadra => "Uttara Bhadra",
            Self::Revathi => "Revathi",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revathi = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Determine the nakshatra from an ayanamsa-adjusted longitude in degrees.
///
/// `index = floor(longitude * 27 / 360)`, in [0, 26] for longitude in
/// [0, 360).
pub fn nakshatra_from_longitude(adjusted_lon_deg: f64) -> Nakshatra {
    let lon = normalize_360(adjusted_lon_deg);
    let idx = ((lon * 27.0 / 360.0).floor() as usize).min(26);
    ALL_NAKSHATRAS[idx]
}
