//! Integration tests for the planetary-hour partitioner.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use panchanga_base::{HORA_COUNT, Planet, day_ruler, hora_rulers};
use panchanga_ephem::{EphemerisError, EphemerisProvider, EphemerisSample, GeoLocation};
use panchanga_search::{HoraPeriod, SearchError, TimezoneSpec, current_hora, partition_day};

/// Scripted rise/set provider: fixed times on the base date, a slightly
/// different sunrise on the following date.
struct StubRiseSet {
    base: NaiveDate,
    sunrise: NaiveTime,
    sunset: NaiveTime,
    next_sunrise: NaiveTime,
    polar: Option<EphemerisError>,
}

impl StubRiseSet {
    fn new(base: NaiveDate) -> Self {
        Self {
            base,
            sunrise: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            next_sunrise: NaiveTime::from_hms_opt(7, 1, 0).unwrap(),
            polar: None,
        }
    }
}

impl EphemerisProvider for StubRiseSet {
    fn positions(
        &self,
        _instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<EphemerisSample, EphemerisError> {
        Ok(EphemerisSample {
            sun_ra_hours: 0.0,
            moon_ra_hours: 0.0,
            moon_phase_deg: 0.0,
            julian_date: 0.0,
        })
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        _location: &GeoLocation,
        _horizon_deg: f64,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), EphemerisError> {
        if let Some(err) = self.polar {
            return Err(err);
        }
        let rise = if date == self.base {
            self.sunrise
        } else {
            self.next_sunrise
        };
        Ok((
            date.and_time(rise).and_utc(),
            date.and_time(self.sunset).and_utc(),
        ))
    }
}

/// 2024-01-01, a Monday.
fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn greenwich() -> GeoLocation {
    GeoLocation::new(51.48, 0.0, 0.0)
}

fn utc_offset() -> TimezoneSpec {
    TimezoneSpec::parse("+00:00").unwrap()
}

#[test]
fn twelve_day_and_twelve_night() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    assert_eq!(horas.len(), HORA_COUNT);
    assert!(horas[..12].iter().all(|h| h.period == HoraPeriod::Day));
    assert!(horas[12..].iter().all(|h| h.period == HoraPeriod::Night));
}

#[test]
fn covers_sunrise_to_next_sunrise() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let local = |d: u32, h: u32, m: u32| {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, d, h, m, 0)
            .unwrap()
    };
    assert_eq!(horas[0].start, local(1, 7, 0));
    assert_eq!(horas[11].end, local(1, 17, 0));
    assert_eq!(horas[12].start, local(1, 17, 0));
    assert_eq!(horas[23].end, local(2, 7, 1));
}

#[test]
fn contiguous_no_gaps_no_overlaps() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    for pair in horas.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    for h in &horas {
        assert!(h.start < h.end);
    }
}

#[test]
fn day_and_night_sums_are_exact() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let day_sum = horas[..12]
        .iter()
        .map(|h| h.end - h.start)
        .fold(Duration::zero(), |acc, d| acc + d);
    let night_sum = horas[12..]
        .iter()
        .map(|h| h.end - h.start)
        .fold(Duration::zero(), |acc, d| acc + d);
    assert_eq!(day_sum, Duration::hours(10));
    assert_eq!(night_sum, Duration::hours(14) + Duration::minutes(1));
}

#[test]
fn hora_lengths_differ_from_civil_hour() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let day_len = horas[0].end - horas[0].start;
    let night_len = horas[12].end - horas[12].start;
    assert_eq!(day_len, Duration::minutes(50));
    assert_ne!(day_len, Duration::minutes(60));
    assert_ne!(day_len, night_len);
}

#[test]
fn first_hora_ruled_by_day_lord() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    // 2024-01-01 is a Monday.
    assert_eq!(horas[0].planet, Planet::Moon);
    assert_eq!(horas[0].planet, day_ruler(base_date().weekday()));
}

#[test]
fn rulers_follow_chaldean_rotation() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let expected = hora_rulers(base_date().weekday());
    for (h, &planet) in horas.iter().zip(expected.iter()) {
        assert_eq!(h.planet, planet);
    }
}

#[test]
fn deterministic_across_calls() {
    let provider = StubRiseSet::new(base_date());
    let a = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let b = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn current_hora_half_open_lookup() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let at = |h: u32, m: u32| Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap();

    // Mid first hora.
    let first = current_hora(&horas, at(7, 30)).unwrap();
    assert_eq!(first.start, horas[0].start);
    // Last minute of the day half.
    let last_day = current_hora(&horas, at(16, 59)).unwrap();
    assert_eq!(last_day.start, horas[11].start);
    // Sunset belongs to the first night hora.
    let first_night = current_hora(&horas, at(17, 0)).unwrap();
    assert_eq!(first_night.start, horas[12].start);
    // A shared boundary belongs to the later hora.
    let boundary = horas[1].start.with_timezone(&Utc);
    assert_eq!(current_hora(&horas, boundary).unwrap().start, horas[1].start);
}

#[test]
fn current_hora_outside_cycle_is_none() {
    let provider = StubRiseSet::new(base_date());
    let horas = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap();
    let before = Utc.with_ymd_and_hms(2024, 1, 1, 6, 59, 0).unwrap();
    assert!(current_hora(&horas, before).is_none());
    let final_boundary = horas[23].end.with_timezone(&Utc);
    assert!(current_hora(&horas, final_boundary).is_none());
}

#[test]
fn offset_and_lmt_shift_labels() {
    // Longitude 82.5 sits 7.5 deg west of its standard meridian (90),
    // a -30 minute local-mean-time correction.
    let provider = StubRiseSet::new(base_date());
    let location = GeoLocation::new(20.0, 82.5, 0.0);
    let tz = TimezoneSpec::parse("+05:30").unwrap();
    let horas = partition_day(&provider, base_date(), &location, tz).unwrap();
    let expected = FixedOffset::east_opt(5 * 3600 + 30 * 60)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .unwrap();
    // 07:00 UTC + 5:30 offset - 0:30 correction.
    assert_eq!(horas[0].start, expected);
}

#[test]
fn polar_errors_propagate() {
    let mut provider = StubRiseSet::new(base_date());
    provider.polar = Some(EphemerisError::NeverRises);
    let err = partition_day(&provider, base_date(), &greenwich(), utc_offset()).unwrap_err();
    assert_eq!(err, SearchError::Ephemeris(EphemerisError::NeverRises));
}
