//! Julian date conversions.
//!
//! All astronomical formulas in this crate are linear in the Julian date or
//! in Julian centuries since J2000. Instants enter and leave the engine as
//! Unix seconds; intermediate instants stay fractional (`f64`) until the
//! scheduler rounds its final timetable.

use crate::constants::{DAYS_PER_CENTURY, J2000_EPOCH_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// Julian date of a (possibly fractional) Unix instant.
pub fn julian_date(unix: f64) -> f64 {
    UNIX_EPOCH_JD + unix / SECONDS_PER_DAY as f64
}

/// Unix instant of a Julian date, rounded to the nearest second.
///
/// For every whole-second instant within a few thousand years of the epoch,
/// `unix_from_julian(julian_date(x as f64)) == x`.
pub fn unix_from_julian(jd: f64) -> i64 {
    (SECONDS_PER_DAY as f64 * (jd - UNIX_EPOCH_JD)).round() as i64
}

/// Days elapsed since the J2000 epoch.
pub fn days_since_j2000(unix: f64) -> f64 {
    julian_date(unix) - J2000_EPOCH_JD
}

/// Julian centuries elapsed since the J2000 epoch (the `T` of the solar and
/// lunar models).
pub fn julian_centuries(unix: f64) -> f64 {
    days_since_j2000(unix) / DAYS_PER_CENTURY
}
