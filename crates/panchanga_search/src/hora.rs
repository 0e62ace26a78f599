//! Planetary-hour (hora) partitioning of a solar day.
//!
//! The day (sunrise to sunset) and the night (sunset to the next day's
//! sunrise) are each divided into 12 horas. Their lengths vary with date
//! and latitude and generally equal neither 60 minutes nor each other,
//! which is what distinguishes the hora system from the civil clock.
//! Rulers follow the Chaldean order rotated to the weekday's day lord.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};

use panchanga_base::{HORA_COUNT, Planet, hora_rulers};
use panchanga_ephem::{EphemerisProvider, GeoLocation, HORIZON_DEG};

use crate::error::SearchError;
use crate::hora_types::{Hora, HoraPeriod};
use crate::timezone::TimezoneSpec;

/// Horas per half of the diurnal cycle.
const HORAS_PER_PERIOD: usize = HORA_COUNT / 2;

/// Local-mean-time correction for a longitude, in hours.
///
/// Four minutes per degree of offset from the nearest 15-degree standard
/// meridian.
pub fn lmt_adjustment_hours(longitude_deg: f64) -> f64 {
    let standard_meridian = (longitude_deg / 15.0).round() * 15.0;
    4.0 * (longitude_deg - standard_meridian) / 60.0
}

/// Partition one civil date into its 24 planetary hours.
///
/// The timezone spec is resolved to a fixed UTC offset for the date before
/// anything else. Sunrise and sunset are queried for the date and sunrise
/// again for the following date, all at the standard -0 deg 34' horizon;
/// the offset and the local-mean-time correction are applied to all three.
/// The result is 12 Day horas from sunrise followed by 12 Night horas from
/// sunset, exactly contiguous.
pub fn partition_day<P>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
    timezone: TimezoneSpec,
) -> Result<Vec<Hora>, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    let offset = timezone.utc_offset_on(date);
    let (sunrise_utc, sunset_utc) = provider.sunrise_sunset(date, location, HORIZON_DEG)?;
    let (next_sunrise_utc, _) =
        provider.sunrise_sunset(date + Duration::days(1), location, HORIZON_DEG)?;

    let lmt = Duration::milliseconds(
        (lmt_adjustment_hours(location.longitude_deg) * 3_600_000.0).round() as i64,
    );
    let sunrise = sunrise_utc.with_timezone(&offset) + lmt;
    let sunset = sunset_utc.with_timezone(&offset) + lmt;
    let next_sunrise = next_sunrise_utc.with_timezone(&offset) + lmt;

    let rulers = hora_rulers(date.weekday());

    let mut horas = Vec::with_capacity(HORA_COUNT);
    push_period(
        &mut horas,
        sunrise,
        sunset,
        &rulers[..HORAS_PER_PERIOD],
        HoraPeriod::Day,
    );
    push_period(
        &mut horas,
        sunset,
        next_sunrise,
        &rulers[HORAS_PER_PERIOD..],
        HoraPeriod::Night,
    );
    Ok(horas)
}

/// Split `[start, end)` into 12 horas with the given rulers.
///
/// Boundary `i` sits at `start + span * i / 12` in whole milliseconds, so
/// boundary 12 is exactly `end` and consecutive horas share boundaries.
fn push_period(
    horas: &mut Vec<Hora>,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    rulers: &[Planet],
    period: HoraPeriod,
) {
    let span_ms = (end - start).num_milliseconds();
    let count = rulers.len() as i64;
    for (i, &planet) in rulers.iter().enumerate() {
        let i = i as i64;
        horas.push(Hora {
            start: start + Duration::milliseconds(span_ms * i / count),
            end: start + Duration::milliseconds(span_ms * (i + 1) / count),
            planet,
            period,
        });
    }
}

/// The hora whose half-open `[start, end)` interval contains `instant`.
///
/// Returns `None` when the instant precedes the first hora or lies at or
/// beyond the cycle's final boundary.
pub fn current_hora(horas: &[Hora], instant: DateTime<Utc>) -> Option<&Hora> {
    horas
        .iter()
        .find(|h| h.start <= instant && instant < h.end)
}
