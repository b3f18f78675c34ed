//! Altitude-to-time solver.
//!
//! Finds how long before or after solar noon the sun crosses a given
//! altitude at a given latitude. The hour angle equation is solved with a
//! fixed number of refinement passes ([`SOLVER_ITERATIONS`]), each pass
//! re-evaluating the declination at the previous estimate.

use super::solar::declination;
use crate::constants::{SECONDS_PER_RADIAN, SOLVER_ITERATIONS};

/// Outcome of [`sun_time`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunTime {
    /// The altitude is crossed this many seconds before and after noon.
    Offset(f64),
    /// The sun does not reach the altitude on this day at this latitude
    /// (polar day or night, or a twilight that never ends).
    Unreachable,
}

impl SunTime {
    /// The offset in seconds, if the altitude is reachable.
    pub fn seconds(self) -> Option<f64> {
        match self {
            SunTime::Offset(seconds) => Some(seconds),
            SunTime::Unreachable => None,
        }
    }
}

/// Seconds between solar noon and the moment the sun's altitude equals
/// `altitude` degrees, for an observer at `latitude` degrees.
///
/// `around` is the reference instant (usually mean noon of the day in
/// question) at which the declination is first evaluated.
pub fn sun_time(altitude: f64, around: f64, latitude: f64) -> SunTime {
    let latitude = latitude.to_radians();
    let altitude = altitude.to_radians();
    let mut estimate = 0.0;

    for _ in 0..SOLVER_ITERATIONS {
        let declination = declination(around + estimate);
        let cos_hour_angle = (altitude.sin() - declination.sin() * latitude.sin())
            / (declination.cos() * latitude.cos());

        // NaN fails the range check as well
        if !(-1.0..=1.0).contains(&cos_hour_angle) {
            return SunTime::Unreachable;
        }
        estimate = cos_hour_angle.acos() * SECONDS_PER_RADIAN;
    }

    SunTime::Offset(estimate)
}
