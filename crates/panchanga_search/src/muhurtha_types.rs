//! Types and rule registry for muhurtha window search.

use chrono::{DateTime, Utc, Weekday};

use panchanga_base::{Nakshatra, Tithi};

use crate::classify::PanchangaClassification;
use crate::error::SearchError;

/// Activities with registered suitability rules.
///
/// The registry is a closed enumeration: unknown keys are rejected at
/// [`Activity::from_key`], never inside the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Marriage,
    HouseWarming,
    Meeting,
}

/// All registered activities.
pub const ALL_ACTIVITIES: [Activity; 3] = [
    Activity::Marriage,
    Activity::HouseWarming,
    Activity::Meeting,
];

/// Static suitability criteria for one activity.
///
/// Fixed at compile time and read-only thereafter; extensible by adding
/// entries, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRule {
    /// Nakshatras considered favorable.
    pub good_nakshatras: &'static [Nakshatra],
    /// Tithis to avoid. An avoided running name lists both of its paksha
    /// variants.
    pub avoid_tithis: &'static [Tithi],
    /// Favorable weekdays.
    pub good_weekdays: &'static [Weekday],
}

impl ActivityRule {
    /// Whether a classification on the given weekday satisfies the rule.
    pub fn is_suitable(&self, weekday: Weekday, c: &PanchangaClassification) -> bool {
        self.good_nakshatras.contains(&c.nakshatra)
            && !self.avoid_tithis.contains(&c.tithi)
            && self.good_weekdays.contains(&weekday)
    }
}

const MARRIAGE_RULE: ActivityRule = ActivityRule {
    good_nakshatras: &[
        Nakshatra::Rohini,
        Nakshatra::Magha,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
    ],
    avoid_tithis: &[
        Tithi::Amavasya,
        Tithi::ShuklaChathurthi,
        Tithi::KrishnaChathurthi,
    ],
    good_weekdays: &[Weekday::Mon, Weekday::Thu, Weekday::Fri],
};

const HOUSE_WARMING_RULE: ActivityRule = ActivityRule {
    good_nakshatras: &[
        Nakshatra::Rohini,
        Nakshatra::UttaraPhalguni,
        Nakshatra::UttaraAshada,
    ],
    avoid_tithis: &[Tithi::Amavasya],
    good_weekdays: &[Weekday::Mon, Weekday::Thu, Weekday::Sat],
};

const MEETING_RULE: ActivityRule = ActivityRule {
    good_nakshatras: &[
        Nakshatra::Ashwini,
        Nakshatra::Pushya,
        Nakshatra::Chitra,
        Nakshatra::Swathi,
    ],
    avoid_tithis: &[
        Tithi::ShuklaAshtami,
        Tithi::KrishnaAshtami,
        Tithi::ShuklaNavami,
        Tithi::KrishnaNavami,
    ],
    good_weekdays: &[Weekday::Tue, Weekday::Wed, Weekday::Fri],
};

impl Activity {
    /// Registry key for the activity.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::HouseWarming => "house_warming",
            Self::Meeting => "meeting",
        }
    }

    /// Look up an activity by registry key.
    pub fn from_key(key: &str) -> Result<Self, SearchError> {
        ALL_ACTIVITIES
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| SearchError::UnknownActivity(key.to_string()))
    }

    /// Suitability rule for this activity.
    pub const fn rule(self) -> ActivityRule {
        match self {
            Self::Marriage => MARRIAGE_RULE,
            Self::HouseWarming => HOUSE_WARMING_RULE,
            Self::Meeting => MEETING_RULE,
        }
    }

    /// Activity-specific rationale line used in window explanations.
    pub const fn rationale(self) -> &'static str {
        match self {
            Self::Marriage => "- This combination supports harmony and long-lasting relationships",
            Self::HouseWarming => {
                "- This combination supports prosperity and positive energy in the new home"
            }
            Self::Meeting => {
                "- This combination supports clear communication and successful outcomes"
            }
        }
    }
}

/// Window quality grade.
///
/// The scanner grades every sample, but only `Good` ever reaches an
/// emitted window because the same predicate gates window entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Good,
    Neutral,
}

impl Quality {
    /// Name of the grade.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
        }
    }
}

/// A contiguous run of samples suitable for an activity.
///
/// Produced only by the scanner; `start < end` always holds. The
/// explanation is a snapshot taken when the window opened.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhurthaWindow {
    /// First suitable sample instant.
    pub start: DateTime<Utc>,
    /// Closing boundary (exclusive).
    pub end: DateTime<Utc>,
    /// Quality grade of the opening sample.
    pub quality: Quality,
    /// Explanation snapshot from the opening sample.
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for activity in ALL_ACTIVITIES {
            assert_eq!(Activity::from_key(activity.key()).unwrap(), activity);
        }
    }

    #[test]
    fn unknown_key_rejected() {
        let err = Activity::from_key("funeral").unwrap_err();
        assert_eq!(err, SearchError::UnknownActivity("funeral".to_string()));
    }

    #[test]
    fn avoided_names_cover_both_pakshas() {
        let rule = Activity::Marriage.rule();
        assert!(rule.avoid_tithis.contains(&Tithi::ShuklaChathurthi));
        assert!(rule.avoid_tithis.contains(&Tithi::KrishnaChathurthi));
    }

    #[test]
    fn rules_nonempty() {
        for activity in ALL_ACTIVITIES {
            let rule = activity.rule();
            assert!(!rule.good_nakshatras.is_empty());
            assert!(!rule.good_weekdays.is_empty());
        }
    }
}
