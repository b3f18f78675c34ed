//! Day frame resolution.
//!
//! A prayer timetable belongs to a *solar* day: the interval between two
//! apparent midnights. The civil day that contains an instant in the
//! observer's UTC offset is only a first guess; [`DayFrame::resolve`] shifts
//! it by a whole day when the instant lies outside the apparent midnights
//! bounding that civil day.

use serde::Serialize;

use super::solar::equation_of_time;
use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_DEGREE};

/// Anchors of the solar day containing an instant, in fractional Unix
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayFrame {
    /// Start of the civil day (local 0:00 in the configured offset).
    pub base: f64,
    /// Mean solar noon.
    pub midday: f64,
    /// Apparent solar midnight opening the day.
    pub apparent_midnight: f64,
    /// Apparent solar midnight closing the day.
    pub next_midnight: f64,
}

impl DayFrame {
    /// Resolve the solar day containing `instant` for an observer at
    /// `longitude` degrees keeping `utc_offset` hours.
    pub fn resolve(instant: i64, longitude: f64, utc_offset: f64) -> Self {
        let base = basetime(instant, longitude, utc_offset);
        Self {
            base,
            midday: midday(base, longitude, utc_offset),
            apparent_midnight: midnight(base, longitude, utc_offset),
            next_midnight: midnight(base + SECONDS_PER_DAY as f64, longitude, utc_offset),
        }
    }
}

/// Local 0:00 of the civil day whose apparent-midnight window contains
/// `instant`.
pub fn basetime(instant: i64, longitude: f64, utc_offset: f64) -> f64 {
    let day = SECONDS_PER_DAY as f64;
    let day_begin = (instant.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY) as f64
        - utc_offset * 3600.0;

    let opening = midnight(day_begin, longitude, utc_offset);
    let closing = midnight(day_begin + day, longitude, utc_offset);
    let now = instant as f64;

    let shift = if now > closing {
        1.0
    } else if now < opening {
        -1.0
    } else {
        0.0
    };
    day_begin + day * shift
}

/// Mean solar noon of the day starting at `base`.
pub fn midday(base: f64, longitude: f64, utc_offset: f64) -> f64 {
    base + (180.0 + utc_offset * 15.0 - longitude) * SECONDS_PER_DEGREE
}

/// Apparent solar midnight at the start of the day starting at `base`.
pub fn midnight(base: f64, longitude: f64, utc_offset: f64) -> f64 {
    let mean_midnight = base + (utc_offset * 15.0 - longitude) * SECONDS_PER_DEGREE;
    mean_midnight - equation_of_time(mean_midnight)
}
