//! Muhurtha window search: fixed-step scan with transition-based merging.
//!
//! The scanner samples the range at a fixed step, classifies each sample,
//! and merges contiguous suitable samples into windows. The sweep is a
//! deterministic simulated-time iteration, not tied to wall-clock time;
//! per-sample classifications are independent, only the merge is ordered.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

use panchanga_ephem::EphemerisProvider;

use crate::classify::{PanchangaClassification, classify};
use crate::error::SearchError;
use crate::muhurtha_types::{Activity, MuhurthaWindow, Quality};

/// English weekday name.
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Grade one sample. Only `Good` ever surfaces on an emitted window
/// because the same predicate gates window entry.
fn evaluate_quality(suitable: bool) -> Quality {
    if suitable { Quality::Good } else { Quality::Neutral }
}

/// Explanation snapshot for a window opening at a suitable sample.
fn build_explanation(
    activity: Activity,
    weekday: Weekday,
    c: &PanchangaClassification,
) -> String {
    let key = activity.key();
    format!(
        "This is a good time for {key} because:\n\
         - It falls on {weekday}, which is an auspicious day for {key}\n\
         - The Nakshatra (lunar mansion) is {nakshatra}, which is favorable for {key}\n\
         - The Tithi (lunar day) is {tithi}, which is not in the avoided tithis\n\
         - The Paksha (lunar phase) is {paksha}\n\
         {rationale}",
        weekday = weekday_name(weekday),
        nakshatra = c.nakshatra.name(),
        tithi = c.tithi.name(),
        paksha = c.paksha.name(),
        rationale = activity.rationale(),
    )
}

/// Find contiguous time windows suitable for an activity.
///
/// Samples `start, start + step, start + 2 step, ...` while the sample is
/// at or before `end`. A window opens on the first suitable sample and
/// closes half-open at the first unsuitable one. A window still open when
/// the range is exhausted closes at the final probed instant, one step
/// beyond the last evaluated sample; that quantization is kept as
/// documented behavior.
///
/// The result is sorted ascending by start and non-overlapping by
/// construction. An empty range (`start > end`) yields an empty result.
/// A non-positive `step_hours` is rejected.
pub fn find_windows<P>(
    provider: &P,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    activity: Activity,
    step_hours: f64,
) -> Result<Vec<MuhurthaWindow>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    if !(step_hours > 0.0) {
        return Err(SearchError::InvalidStep(step_hours));
    }
    let step = Duration::milliseconds((step_hours * 3_600_000.0).round() as i64);
    let rule = activity.rule();

    let mut windows = Vec::new();
    let mut open: Option<(DateTime<Utc>, Quality, String)> = None;
    let mut t = start;

    while t <= end {
        let classification = classify(provider, t)?;
        let weekday = t.weekday();
        let suitable = rule.is_suitable(weekday, &classification);
        let quality = evaluate_quality(suitable);

        if suitable {
            if open.is_none() {
                let explanation = build_explanation(activity, weekday, &classification);
                open = Some((t, quality, explanation));
            }
        } else if let Some((window_start, window_quality, explanation)) = open.take() {
            windows.push(MuhurthaWindow {
                start: window_start,
                end: t,
                quality: window_quality,
                explanation,
            });
        }

        t += step;
    }

    // Range exhausted while inside a window: close at the final probed
    // instant.
    if let Some((window_start, window_quality, explanation)) = open {
        windows.push(MuhurthaWindow {
            start: window_start,
            end: t,
            quality: window_quality,
            explanation,
        });
    }

    Ok(windows)
}

/// Format a duration in fractional hours as hours and minutes.
pub fn format_duration(duration_hours: f64) -> String {
    let total_minutes = (duration_hours * 60.0) as i64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours == 0 {
        format!("{minutes} minutes")
    } else if minutes == 0 {
        format!("{hours} hours")
    } else {
        format!("{hours} hours {minutes} minutes")
    }
}
