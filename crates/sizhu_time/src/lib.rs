//! Civil-to-true-solar-time correction.
//!
//! This crate provides:
//! - Longitude offset from the UTC+8 reference meridian (4 min/degree)
//! - The equation of time (seasonal clock-vs-sun offset)
//! - Application of both to a `chrono::NaiveDateTime`
//!
//! Calendar conversion (solar terms, lunar dates, pillar extraction) is a
//! collaborator concern and does not live here.

pub mod error;
pub mod solar;

pub use error::TimeError;
pub use solar::{
    DEFAULT_COORDINATE, MINUTES_PER_DEGREE, REFERENCE_MERIDIAN_DEG, equation_of_time_minutes,
    longitude_correction_minutes, total_correction_minutes, true_solar_time,
};
