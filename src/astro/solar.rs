//! Low-precision solar ephemeris.
//!
//! Every function here is pure. Angles are radians unless a name says
//! otherwise; `t` is Julian centuries since J2000 (see
//! [`julian_centuries`]), while the functions taking `unix` accept a
//! fractional Unix instant.

use std::f64::consts::{PI, TAU};

use super::bearing::celestial_azimuth;
use super::time::{days_since_j2000, julian_centuries};
use crate::constants::*;

/// Mean longitude of the sun.
pub fn sun_mean_longitude(t: f64) -> f64 {
    SUN_MEAN_LONGITUDE_0 + SUN_MEAN_LONGITUDE_1 * t
}

/// Mean anomaly of the sun.
pub fn sun_mean_anomaly(t: f64) -> f64 {
    SUN_MEAN_ANOMALY_0 + SUN_MEAN_ANOMALY_1 * t
}

/// True (geometric) longitude of the sun: mean longitude plus the
/// equation of centre.
pub fn sun_true_longitude(t: f64) -> f64 {
    let mean_anomaly = sun_mean_anomaly(t);
    let center = (SUN_CENTER_1 + SUN_CENTER_1_RATE * t) * mean_anomaly.sin()
        + SUN_CENTER_2 * (2.0 * mean_anomaly).sin();
    sun_mean_longitude(t) + center
}

/// Obliquity of the ecliptic.
pub fn obliquity(t: f64) -> f64 {
    OBLIQUITY_0 + OBLIQUITY_1 * t
}

/// Declination of the sun at a Unix instant.
pub fn declination(unix: f64) -> f64 {
    let t = julian_centuries(unix);
    (sun_true_longitude(t).sin() * obliquity(t).sin()).asin()
}

/// Right ascension of the sun, in `(-pi, pi]`.
pub fn right_ascension(t: f64) -> f64 {
    let longitude = sun_true_longitude(t);
    (longitude.sin() * obliquity(t).cos()).atan2(longitude.cos())
}

/// Equation of time in seconds: apparent minus mean solar time.
pub fn equation_of_time(unix: f64) -> f64 {
    let t = julian_centuries(unix);
    let delta = sun_mean_longitude(t) - right_ascension(t);
    // -pi <= delta < pi
    let delta = delta - ((delta + PI) / TAU).floor() * TAU;
    delta * SECONDS_PER_RADIAN
}

/// Local mean sidereal time in hours (not reduced to `[0, 24)`).
pub fn mean_sidereal_time(unix: f64, longitude: f64) -> f64 {
    let days = days_since_j2000(unix);

    // Days to the preceding 0h UT
    let day_start = days.floor() - 0.5 + if days - days.floor() >= 0.5 { 1.0 } else { 0.0 };
    let hours_ut = 24.0 * (days - day_start);
    let t = days / DAYS_PER_CENTURY;

    SIDEREAL_0 + SIDEREAL_1 * day_start + SIDEREAL_2 * hours_ut + SIDEREAL_3 * t.powi(2)
        + longitude / 15.0
}

/// Azimuth of the sun in degrees, `[0, 360)`, measured from north.
pub fn sun_azimuth(unix: f64, latitude: f64, longitude: f64) -> f64 {
    let t = julian_centuries(unix);
    celestial_azimuth(
        right_ascension(t),
        declination(unix),
        mean_sidereal_time(unix, longitude),
        latitude,
    )
}

/// Altitude of the sun in degrees, without refraction.
pub fn sun_altitude(unix: f64, latitude: f64, longitude: f64) -> f64 {
    let t = julian_centuries(unix);
    let hour_angle = (mean_sidereal_time(unix, longitude) * 15.0).to_radians() - right_ascension(t);
    let declination = declination(unix);
    let latitude = latitude.to_radians();

    (latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos())
    .asin()
    .to_degrees()
}
