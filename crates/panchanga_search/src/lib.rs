//! Panchanga classification, muhurtha window search, and hora partitioning.
//!
//! This crate provides the three drivers over an [`EphemerisProvider`]:
//! - [`classify`]: the six-field panchanga classification of one instant
//! - [`find_windows`]: fixed-step scan of a time range for contiguous
//!   windows suitable for an activity
//! - [`partition_day`]: the 24 unequal planetary hours of a solar day,
//!   with a current-hora lookup
//!
//! plus the timezone and civil-input parsing used at the boundary.
//!
//! [`EphemerisProvider`]: panchanga_ephem::EphemerisProvider

pub mod classify;
pub mod error;
pub mod hora;
pub mod hora_types;
pub mod input;
pub mod muhurtha;
pub mod muhurtha_types;
pub mod timezone;

pub use classify::{PanchangaClassification, classify};
pub use error::SearchError;
pub use hora::{current_hora, lmt_adjustment_hours, partition_day};
pub use hora_types::{Hora, HoraPeriod};
pub use input::{parse_date_dmy, parse_time_of_day};
pub use muhurtha::{find_windows, format_duration};
pub use muhurtha_types::{ALL_ACTIVITIES, Activity, ActivityRule, MuhurthaWindow, Quality};
pub use timezone::TimezoneSpec;
