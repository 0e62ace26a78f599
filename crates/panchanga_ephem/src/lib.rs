//! Ephemeris access for panchanga classification and hora partitioning.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] trait, the seam through which the drivers
//!   obtain Sun/Moon scalar positions and daily rise/set instants
//! - The [`AnalyticEphemeris`] reference provider, built from standard
//!   low-precision closed-form series
//!
//! The consuming crates never model orbital motion themselves; they treat
//! provider outputs as trusted scalars.

pub mod analytic;
pub mod error;
pub mod provider;
pub mod types;

pub use analytic::{AnalyticEphemeris, datetime_from_jd, julian_date};
pub use error::EphemerisError;
pub use provider::EphemerisProvider;
pub use types::{EphemerisSample, GeoLocation, HORIZON_DEG, REFERENCE_OBSERVER};
