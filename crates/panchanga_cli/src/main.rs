use std::error::Error;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use panchanga_ephem::{AnalyticEphemeris, GeoLocation};
use panchanga_search::{
    Activity, PanchangaClassification, SearchError, TimezoneSpec, classify, current_hora,
    find_windows, format_duration, parse_date_dmy, parse_time_of_day, partition_day,
};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Parser)]
#[command(name = "panchanga", about = "Vedic panchanga, muhurtha, and hora calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a date and time into the six panchanga fields
    Panchanga {
        /// Date in DD/MM/YYYY format
        #[arg(short, long)]
        date: String,
        /// Time in HH:MM 24-hour format
        #[arg(short, long)]
        time: String,
        /// Zone with respect to GMT in [+/-]HH:MM format, or an IANA name
        #[arg(short, long)]
        zone: String,
    },
    /// Render a month grid of panchanga elements
    Calendar {
        /// Month number (1-12); defaults to the current month
        #[arg(long)]
        month: Option<u32>,
        /// Year; defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// Zone with respect to GMT in [+/-]HH:MM format, or an IANA name
        #[arg(short, long)]
        zone: String,
    },
    /// Find suitable time windows for an activity
    Muhurtha {
        /// Range start as YYYY-MM-DDTHH:MM, local to --zone
        #[arg(long)]
        start: String,
        /// Range end as YYYY-MM-DDTHH:MM, local to --zone
        #[arg(long)]
        end: String,
        /// Activity key: marriage, house_warming, or meeting
        #[arg(long)]
        activity: String,
        /// Sampling step in hours
        #[arg(long, default_value_t = 1.0)]
        step_hours: f64,
        /// Zone for interpreting the range; defaults to UTC
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Planetary hours for a date and location
    Hora {
        /// Date in YYYY-MM-DD format; defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,
        /// Timezone name (e.g. "Asia/Tehran") or offset (e.g. "+03:30")
        #[arg(long)]
        tz: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Panchanga { date, time, zone } => run_panchanga(&date, &time, &zone),
        Commands::Calendar { month, year, zone } => run_calendar(month, year, &zone),
        Commands::Muhurtha {
            start,
            end,
            activity,
            step_hours,
            zone,
        } => run_muhurtha(&start, &end, &activity, step_hours, zone.as_deref()),
        Commands::Hora { date, lat, lon, tz } => run_hora(date.as_deref(), lat, lon, &tz),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Convert a local civil datetime to UTC using the offset the spec
/// resolves to on that date.
fn local_to_utc(local: NaiveDateTime, timezone: TimezoneSpec) -> DateTime<Utc> {
    let offset = timezone.utc_offset_on(local.date());
    (local - Duration::seconds(offset.local_minus_utc() as i64)).and_utc()
}

fn run_panchanga(date: &str, time: &str, zone: &str) -> Result<(), Box<dyn Error>> {
    let date = parse_date_dmy(date)?;
    let time = parse_time_of_day(time)?;
    let timezone = TimezoneSpec::parse(zone)?;
    let instant = local_to_utc(date.and_time(time), timezone);

    let provider = AnalyticEphemeris::new();
    let c = classify(&provider, instant)?;

    println!("Tithi     : {}, {} Paksha", c.tithi.name(), c.paksha.name());
    println!("Nakshatra : {}", c.nakshatra.name());
    println!("Yoga      : {}", c.yoga.name());
    println!("Karana    : {}", c.karana.name());
    println!("Rashi     : {}", c.rashi.name());
    Ok(())
}

/// First three letters of a name, for calendar cells.
fn short(name: &str) -> &str {
    name.get(..3).unwrap_or(name)
}

fn run_calendar(month: Option<u32>, year: Option<i32>, zone: &str) -> Result<(), Box<dyn Error>> {
    let today = Utc::now().date_naive();
    let month = month.unwrap_or(today.month());
    let year = year.unwrap_or(today.year());
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12".into());
    }
    let timezone = TimezoneSpec::parse(zone)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or("invalid year/month")?;
    let days_in_month = match first.checked_add_months(chrono::Months::new(1)) {
        Some(next_first) => next_first.signed_duration_since(first).num_days() as u32,
        None => return Err("invalid year/month".into()),
    };

    // One classification per day, at local midnight. A failed day renders
    // an explicit error marker; only absent cells of the grid are blank.
    let provider = AnalyticEphemeris::new();
    let classify_day = |day: u32| -> Result<PanchangaClassification, SearchError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| SearchError::InvalidDateFormat(format!("{day}/{month}/{year}")))?;
        let instant = local_to_utc(date.and_time(chrono::NaiveTime::MIN), timezone);
        classify(&provider, instant)
    };
    let results: Vec<Result<PanchangaClassification, SearchError>> =
        (1..=days_in_month).map(classify_day).collect();

    let header = format!("{} {}", MONTHS[(month - 1) as usize], year);
    println!();
    println!("{}", "=".repeat(80));
    println!("{header:^80}");
    println!("{}", "=".repeat(80));
    println!("Mon         Tue         Wed         Thu         Fri         Sat         Sun");
    println!("{}", "-".repeat(80));

    // Month matrix, Monday-first; 0 marks an absent cell.
    let leading = first.weekday().num_days_from_monday();
    let mut cells: Vec<u32> = vec![0; leading as usize];
    cells.extend(1..=days_in_month);
    while cells.len() % 7 != 0 {
        cells.push(0);
    }

    for week in cells.chunks(7) {
        let mut day_row = String::new();
        let mut rows = [String::new(), String::new(), String::new()];
        for &day in week {
            if day == 0 {
                day_row.push_str(&" ".repeat(12));
                for row in &mut rows {
                    row.push_str(&" ".repeat(12));
                }
                continue;
            }
            match &results[(day - 1) as usize] {
                Ok(c) => {
                    day_row.push_str(&format!("{:<12}", format!("{day:2}-{}", short(c.tithi.name()))));
                    rows[0].push_str(&format!("{:<12}", short(c.nakshatra.name())));
                    rows[1].push_str(&format!("{:<12}", short(c.yoga.name())));
                    rows[2].push_str(&format!("{:<12}", short(c.karana.name())));
                }
                Err(_) => {
                    day_row.push_str(&format!("{:<12}", format!("{day:2}-err")));
                    for row in &mut rows {
                        row.push_str(&format!("{:<12}", "err"));
                    }
                }
            }
        }
        println!("{}", day_row.trim_end());
        for row in &rows {
            println!("{}", row.trim_end());
        }
        println!("{}", "-".repeat(80));
    }
    Ok(())
}

fn run_muhurtha(
    start: &str,
    end: &str,
    activity: &str,
    step_hours: f64,
    zone: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let timezone = match zone {
        Some(z) => Some(TimezoneSpec::parse(z)?),
        None => None,
    };
    let parse_local = |s: &str| -> Result<DateTime<Utc>, Box<dyn Error>> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .map_err(|_| format!("invalid datetime: {s} (use YYYY-MM-DDTHH:MM)"))?;
        Ok(match timezone {
            Some(spec) => local_to_utc(naive, spec),
            None => naive.and_utc(),
        })
    };
    let start = parse_local(start)?;
    let end = parse_local(end)?;
    let activity = Activity::from_key(activity)?;

    let provider = AnalyticEphemeris::new();
    let windows = find_windows(&provider, start, end, activity, step_hours)?;

    if windows.is_empty() {
        println!("No suitable periods found.");
        return Ok(());
    }
    for w in &windows {
        let duration_hours = (w.end - w.start).num_seconds() as f64 / 3600.0;
        let (start_str, end_str) = match timezone {
            Some(spec) => {
                let offset = spec.utc_offset_on(w.start.date_naive());
                (
                    w.start.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string(),
                    w.end.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string(),
                )
            }
            None => (
                w.start.format("%Y-%m-%d %H:%M").to_string(),
                w.end.format("%Y-%m-%d %H:%M").to_string(),
            ),
        };
        println!("Suitable period:");
        println!("Start: {start_str}");
        println!("End: {end_str}");
        println!("Duration: {}", format_duration(duration_hours));
        println!("Quality: {}", w.quality.name());
        println!();
        println!("Astrological Factors:");
        println!("{}", w.explanation);
        println!("{}", "-".repeat(50));
        println!();
    }
    Ok(())
}

fn run_hora(date: Option<&str>, lat: f64, lon: f64, tz: &str) -> Result<(), Box<dyn Error>> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date: {s} (use YYYY-MM-DD)"))?,
        None => Utc::now().date_naive(),
    };
    let timezone = TimezoneSpec::parse(tz)?;
    let location = GeoLocation::new(lat, lon, 0.0);

    let provider = AnalyticEphemeris::new();
    let horas = partition_day(&provider, date, &location, timezone)?;
    let current_start = current_hora(&horas, Utc::now()).map(|h| h.start);

    println!();
    println!(
        "Vedic Planetary Hours (Hora) for {}",
        date.format("%A, %B %d, %Y")
    );
    println!("Timezone: {tz}");
    println!("Location: {lat}\u{b0}N, {lon}\u{b0}E");
    println!("{}", "-".repeat(100));
    println!(
        "{:<20} {:<10} {:<10} {:<8} {:<8} {:<8}",
        "Time Period", "Planet", "Sanskrit", "Symbol", "Period", "Current"
    );
    println!("{}", "-".repeat(100));
    for h in &horas {
        let time_str = format!("{} - {}", h.start.format("%H:%M"), h.end.format("%H:%M"));
        let marker = if Some(h.start) == current_start {
            "\u{2192} NOW \u{2190}"
        } else {
            ""
        };
        println!(
            "{:<20} {:<10} {:<10} {:<8} {:<8} {:<8}",
            time_str,
            h.planet.name(),
            h.planet.sanskrit_name(),
            h.planet.symbol(),
            h.period.name(),
            marker
        );
    }
    Ok(())
}
