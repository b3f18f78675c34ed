//! Approximate geocentric position of the moon.
//!
//! The moon is placed on a Keplerian orbit described by mean elements that
//! drift linearly with time, then corrected by the largest periodic
//! perturbations. Accuracy is chosen per call with an [`AccuracyTier`];
//! tiers are cumulative, each one adding corrections on top of the previous.
//!
//! | tier        | adds                                                  |
//! |-------------|-------------------------------------------------------|
//! | `Mean`      | mean elements, one-step eccentric anomaly             |
//! | `Kepler`    | Newton solution of Kepler's equation                  |
//! | `Perturbed` | evection, variation, yearly equation, main lat/dist   |
//! | `Full`      | the remaining minor longitude and latitude terms      |

use serde::Serialize;

use super::bearing::celestial_azimuth;
use super::solar::{mean_sidereal_time, obliquity, sun_mean_anomaly, sun_true_longitude};
use super::time::julian_centuries;
use crate::constants::*;

/// How many correction terms the lunar model applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AccuracyTier {
    Mean = 0,
    Kepler = 1,
    Perturbed = 2,
    Full = 3,
}

impl AccuracyTier {
    pub const ALL: [AccuracyTier; 4] = [
        AccuracyTier::Mean,
        AccuracyTier::Kepler,
        AccuracyTier::Perturbed,
        AccuracyTier::Full,
    ];

    /// Tier used when a caller supplies an invalid one.
    pub const DEFAULT: AccuracyTier = AccuracyTier::Full;

    /// Map `0..=3` to a tier; anything else falls back to [`Self::DEFAULT`].
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => AccuracyTier::Mean,
            1 => AccuracyTier::Kepler,
            2 => AccuracyTier::Perturbed,
            3 => AccuracyTier::Full,
            _ => Self::DEFAULT,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AccuracyTier::Mean => "mean elements",
            AccuracyTier::Kepler => "Kepler orbit",
            AccuracyTier::Perturbed => "major perturbations",
            AccuracyTier::Full => "full perturbations",
        }
    }
}

impl Default for AccuracyTier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Geocentric position of the moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPosition {
    /// Ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in Earth radii.
    pub distance: f64,
    /// Right ascension in radians.
    pub right_ascension: f64,
    /// Declination in radians.
    pub declination: f64,
}

/// Position of the moon `t` Julian centuries after J2000.
pub fn moon_position(t: f64, tier: AccuracyTier) -> MoonPosition {
    let days = t * DAYS_PER_CENTURY;

    let node = (MOON_NODE_0 + MOON_NODE_1 * days).to_radians();
    let inclination = MOON_INCLINATION.to_radians();
    let perigee = (MOON_PERIGEE_0 + MOON_PERIGEE_1 * days).to_radians();
    let eccentricity = MOON_ECCENTRICITY;
    let mean_anomaly = (MOON_MEAN_ANOMALY_0 + MOON_MEAN_ANOMALY_1 * days)
        .to_radians()
        .rem_euclid(std::f64::consts::TAU);

    let mut eccentric_anomaly = mean_anomaly
        + eccentricity * mean_anomaly.sin() * (1.0 + eccentricity * mean_anomaly.cos());
    if tier >= AccuracyTier::Kepler {
        eccentric_anomaly = solve_kepler(mean_anomaly, eccentricity, eccentric_anomaly);
    }

    // Position in the orbital plane
    let xv = MOON_SEMI_MAJOR_AXIS * (eccentric_anomaly.cos() - eccentricity);
    let yv = MOON_SEMI_MAJOR_AXIS
        * (1.0 - eccentricity * eccentricity).sqrt()
        * eccentric_anomaly.sin();
    let true_anomaly = yv.atan2(xv);
    let radius = xv.hypot(yv);

    // Rotate into the ecliptic frame
    let argument = true_anomaly + perigee;
    let xh = radius
        * (node.cos() * argument.cos() - node.sin() * argument.sin() * inclination.cos());
    let yh = radius
        * (node.sin() * argument.cos() + node.cos() * argument.sin() * inclination.cos());
    let zh = radius * argument.sin() * inclination.sin();

    let mut longitude = yh.atan2(xh).to_degrees();
    let mut latitude = zh.atan2(xh.hypot(yh)).to_degrees();
    let mut distance = radius;

    if tier >= AccuracyTier::Perturbed {
        let arguments = PerturbationArguments::new(t, node, perigee, mean_anomaly);
        let (d_longitude, d_latitude, d_distance) = arguments.principal();
        longitude += d_longitude;
        latitude += d_latitude;
        distance += d_distance;

        if tier >= AccuracyTier::Full {
            let (d_longitude, d_latitude) = arguments.secondary();
            longitude += d_longitude;
            latitude += d_latitude;
        }
    }

    let (right_ascension, declination) = ecliptic_to_equatorial(longitude, latitude, t);

    MoonPosition {
        longitude: super::bearing::normalize_degrees(longitude),
        latitude,
        distance,
        right_ascension,
        declination,
    }
}

/// Azimuth of the moon in degrees, `[0, 360)`, for an observer at
/// `latitude`/`longitude` degrees.
pub fn moon_azimuth(unix: f64, latitude: f64, longitude: f64, tier: AccuracyTier) -> f64 {
    let position = moon_position(julian_centuries(unix), tier);
    celestial_azimuth(
        position.right_ascension,
        position.declination,
        mean_sidereal_time(unix, longitude),
        latitude,
    )
}

/// Newton iteration on `E - e sin E = M`, starting from `initial`.
fn solve_kepler(mean_anomaly: f64, eccentricity: f64, initial: f64) -> f64 {
    let mut eccentric_anomaly = initial;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let correction = (eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * eccentric_anomaly.cos());
        eccentric_anomaly -= correction;
        if correction.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    eccentric_anomaly
}

/// Rotate ecliptic longitude/latitude (degrees) through the obliquity into
/// right ascension and declination (radians).
fn ecliptic_to_equatorial(longitude: f64, latitude: f64, t: f64) -> (f64, f64) {
    let (longitude, latitude) = (longitude.to_radians(), latitude.to_radians());
    let obliquity = obliquity(t);

    let x = longitude.cos() * latitude.cos();
    let y = longitude.sin() * latitude.cos();
    let z = latitude.sin();

    let ye = y * obliquity.cos() - z * obliquity.sin();
    let ze = y * obliquity.sin() + z * obliquity.cos();

    (ye.atan2(x), ze.atan2(x.hypot(ye)))
}

/// Fundamental angles of the perturbation series, radians.
struct PerturbationArguments {
    /// Mean anomaly of the moon.
    moon_anomaly: f64,
    /// Mean anomaly of the sun.
    sun_anomaly: f64,
    /// Mean elongation of the moon from the sun.
    elongation: f64,
    /// Argument of latitude of the moon.
    latitude_argument: f64,
}

impl PerturbationArguments {
    fn new(t: f64, node: f64, perigee: f64, moon_anomaly: f64) -> Self {
        let moon_longitude = node + perigee + moon_anomaly;
        Self {
            moon_anomaly,
            sun_anomaly: sun_mean_anomaly(t),
            elongation: moon_longitude - sun_true_longitude(t),
            latitude_argument: moon_longitude - node,
        }
    }

    /// Largest terms: degrees of longitude, degrees of latitude, Earth radii.
    fn principal(&self) -> (f64, f64, f64) {
        let (mm, ms, d, f) = self.angles();

        let longitude = -1.274 * (mm - 2.0 * d).sin() // evection
            + 0.658 * (2.0 * d).sin() // variation
            - 0.186 * ms.sin(); // yearly equation
        let latitude = -0.173 * (f - 2.0 * d).sin();
        let distance = -0.58 * (mm - 2.0 * d).cos() - 0.46 * (2.0 * d).cos();

        (longitude, latitude, distance)
    }

    /// Remaining terms: degrees of longitude, degrees of latitude.
    fn secondary(&self) -> (f64, f64) {
        let (mm, ms, d, f) = self.angles();

        let longitude = -0.059 * (2.0 * mm - 2.0 * d).sin()
            - 0.057 * (mm - 2.0 * d + ms).sin()
            + 0.053 * (mm + 2.0 * d).sin()
            + 0.046 * (2.0 * d - ms).sin()
            + 0.041 * (mm - ms).sin()
            - 0.035 * d.sin() // parallactic equation
            - 0.031 * (mm + ms).sin()
            - 0.015 * (2.0 * f - 2.0 * d).sin()
            + 0.011 * (mm - 4.0 * d).sin();
        let latitude = -0.055 * (mm - f - 2.0 * d).sin()
            - 0.046 * (mm + f - 2.0 * d).sin()
            + 0.033 * (f + 2.0 * d).sin()
            + 0.017 * (2.0 * mm + f).sin();

        (longitude, latitude)
    }

    fn angles(&self) -> (f64, f64, f64, f64) {
        (
            self.moon_anomaly,
            self.sun_anomaly,
            self.elongation,
            self.latitude_argument,
        )
    }
}
