//! Closed-form bearings on the sphere.

use crate::constants::{KAABA_LATITUDE, KAABA_LONGITUDE};

/// Reduce an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` can return exactly 360 for tiny negative inputs, which is
/// folded back to 0 to keep the upper bound strict.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(360.0);
    if reduced >= 360.0 { 0.0 } else { reduced }
}

/// Initial great-circle bearing in degrees from an observer to a target,
/// using the spherical cotangent formula.
pub fn bearing(target_latitude: f64, target_longitude: f64, latitude: f64, longitude: f64) -> f64 {
    let a = (target_longitude - longitude).to_radians();
    let b = (90.0 - latitude).to_radians();
    let c = (90.0 - target_latitude).to_radians();

    // cot(c) == tan(pi/2 - c)
    let cot_c = (std::f64::consts::FRAC_PI_2 - c).tan();
    let bearing = a.sin().atan2(b.sin() * cot_c - b.cos() * a.cos());

    normalize_degrees(bearing.to_degrees())
}

/// Bearing of the Ka'aba from an observer.
pub fn qibla(latitude: f64, longitude: f64) -> f64 {
    bearing(KAABA_LATITUDE, KAABA_LONGITUDE, latitude, longitude)
}

/// Horizontal azimuth in degrees of a body at equatorial coordinates
/// (`right_ascension`, `declination`, radians), given local sidereal time
/// in hours and the observer's latitude in degrees.
pub fn celestial_azimuth(
    right_ascension: f64,
    declination: f64,
    sidereal_hours: f64,
    latitude: f64,
) -> f64 {
    let hour_angle = (sidereal_hours * 15.0).to_radians() - right_ascension;
    let latitude = latitude.to_radians();

    let azimuth = (-hour_angle.sin())
        .atan2(declination.tan() * latitude.cos() - latitude.sin() * hour_angle.cos());

    normalize_degrees(azimuth.to_degrees())
}
