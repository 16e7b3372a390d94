//! True-solar-time correction.
//!
//! Civil time in China is kept at the UTC+8 reference meridian (120° E). A
//! birth moment east or west of it is shifted by 4 minutes per degree, and
//! the equation of time adds the seasonal offset between clock noon and the
//! sun's actual transit. Both corrections are pure arithmetic; no calendar
//! or ephemeris lookup is involved.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::TimeError;

/// Longitude of the civil reference meridian (UTC+8), in degrees east.
pub const REFERENCE_MERIDIAN_DEG: f64 = 120.0;

/// Minutes of clock offset per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Fallback coordinate (Beijing: 116.40° E, 39.90° N), used when no
/// birthplace coordinate resolves.
pub const DEFAULT_COORDINATE: (f64, f64) = (116.40, 39.90);

/// Clock-ahead-of-meridian correction in minutes: `(120 − longitude) · 4`.
pub fn longitude_correction_minutes(longitude_deg: f64) -> f64 {
    (REFERENCE_MERIDIAN_DEG - longitude_deg) * MINUTES_PER_DEGREE
}

/// Equation of time in minutes for the date's day of year.
///
/// `B = (day_of_year − 81) · 360/365.242` in radians;
/// `eot = 9.87 sin 2B − 7.53 cos B − 1.5 sin B`.
pub fn equation_of_time_minutes(date: NaiveDateTime) -> f64 {
    let n = date.ordinal() as f64;
    let b = ((n - 81.0) * 360.0 / 365.242).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Total correction in minutes for a date at a longitude.
pub fn total_correction_minutes(civil: NaiveDateTime, longitude_deg: f64) -> f64 {
    longitude_correction_minutes(longitude_deg) + equation_of_time_minutes(civil)
}

/// Apply the true-solar-time correction to a civil timestamp.
pub fn true_solar_time(
    civil: NaiveDateTime,
    longitude_deg: f64,
) -> Result<NaiveDateTime, TimeError> {
    let minutes = total_correction_minutes(civil, longitude_deg);
    let seconds = (minutes * 60.0).round() as i64;
    civil
        .checked_add_signed(Duration::seconds(seconds))
        .ok_or(TimeError::OutOfRange {
            minutes: seconds / 60,
        })
}
