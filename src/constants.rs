//! Application constants and default values.
//!
//! This module centralizes every fixed value used by waqt: configuration
//! defaults and validation ranges, the reference coordinates, and the
//! low-order fit coefficients of the solar and lunar models.
//!
//! The astronomical coefficients are not tunable. They are low-precision
//! fits expressed in radians per Julian century (solar) or degrees per day
//! (lunar) and must be kept bit-for-bit identical, since every pinned
//! timetable in the test suite depends on them.

// # Reference coordinates

/// Latitude of the Ka'aba in degrees.
pub const KAABA_LATITUDE: f64 = 21.422517;
/// Longitude of the Ka'aba in degrees.
pub const KAABA_LONGITUDE: f64 = 39.826166;

// # Configuration defaults

/// Default latitude (Masjid an-Nabawi, Madinah).
pub const DEFAULT_LATITUDE: f64 = 24.494647;
/// Default longitude (Masjid an-Nabawi, Madinah).
pub const DEFAULT_LONGITUDE: f64 = 39.770508;
/// Default UTC offset in hours.
pub const DEFAULT_UTC_OFFSET: f64 = 3.0;
/// Default per-event adjustments in minutes.
pub const DEFAULT_ADJUST_MINUTES: [i64; 6] = [0; 6];

// # Validation ranges

/// Latitude must lie strictly inside this bound (exclusive on both ends).
pub const MAXIMUM_LATITUDE: f64 = 90.0;
/// Longitude lower bound (inclusive).
pub const MINIMUM_LONGITUDE: f64 = -180.0;
/// Longitude upper bound (exclusive).
pub const MAXIMUM_LONGITUDE: f64 = 180.0;
/// Smallest accepted UTC offset in hours.
pub const MINIMUM_UTC_OFFSET: f64 = -13.0;
/// Largest accepted UTC offset in hours.
pub const MAXIMUM_UTC_OFFSET: f64 = 15.0;
/// Largest accepted magnitude of a single adjustment, one day.
pub const MAXIMUM_ADJUST_MINUTES: i64 = 1440;
/// Number of adjustable events (fajr, sunrise, noon, asr, sunset, isha).
pub const ADJUSTABLE_EVENTS: usize = 6;

// # Time

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Unix epoch (1970-01-01 0:00 UTC) as a Julian date. The fractional part
/// carries a constant TT-UTC difference.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.500_761_306;
/// J2000 epoch (2000-01-01 12:00 TT) as a Julian date.
pub const J2000_EPOCH_JD: f64 = 2_451_545.0;
/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Converts an hour angle in radians to seconds of time (43200 / pi).
pub const SECONDS_PER_RADIAN: f64 = 43_200.0 / std::f64::consts::PI;
/// Seconds of time per degree of longitude (15 degrees per hour).
pub const SECONDS_PER_DEGREE: f64 = 240.0;

// # Solar model
//
// Low-precision solar coordinates, after the "Approximate Solar Coordinates"
// fit of the Astronomical Almanac (mean longitude, mean anomaly and the
// two-term equation of centre), expressed in radians per Julian century.

/// Solar altitude at sunrise and sunset in degrees (refraction plus the
/// apparent solar radius).
pub const SUNSET_ALTITUDE: f64 = -0.8333;

/// Mean longitude of the sun: constant term.
pub const SUN_MEAN_LONGITUDE_0: f64 = 4.89506;
/// Mean longitude of the sun: rate per century.
pub const SUN_MEAN_LONGITUDE_1: f64 = 628.33197;
/// Mean anomaly of the sun: constant term.
pub const SUN_MEAN_ANOMALY_0: f64 = 6.24006;
/// Mean anomaly of the sun: rate per century.
pub const SUN_MEAN_ANOMALY_1: f64 = 628.30195;
/// Equation of centre, first harmonic amplitude.
pub const SUN_CENTER_1: f64 = 0.03342;
/// Equation of centre, first harmonic secular change.
pub const SUN_CENTER_1_RATE: f64 = -0.0000873;
/// Equation of centre, second harmonic amplitude.
pub const SUN_CENTER_2: f64 = 0.000349;

/// Obliquity of the ecliptic at J2000 (radians).
pub const OBLIQUITY_0: f64 = 0.40909;
/// Obliquity of the ecliptic, rate per century (radians).
pub const OBLIQUITY_1: f64 = -0.0002295;

// Greenwich mean sidereal time (IAU 1982 expression, in hours), split at
// 0h UT: GMST = S0 + S1 * D0 + S2 * tUT + S3 * T^2.

/// GMST at the J2000 0h UT epoch in hours.
pub const SIDEREAL_0: f64 = 6.697374558;
/// GMST gain per day of D0 in hours.
pub const SIDEREAL_1: f64 = 0.06570982441908;
/// Ratio of sidereal to solar time.
pub const SIDEREAL_2: f64 = 1.002737909350795;
/// Quadratic term in hours per century squared.
pub const SIDEREAL_3: f64 = 0.000026;

// # Altitude solver

/// Number of refinement passes of the altitude solver. Two passes are the
/// accuracy/cost point the timetables are pinned to; this is not a
/// convergence loop.
pub const SOLVER_ITERATIONS: usize = 2;

// # Lunar model
//
// Mean orbital elements of the moon from Paul Schlyter, "How to compute
// planetary positions". Schlyter counts days from 1999-12-31 0:00, which is
// J2000 - 1.5 days; the `_0` terms below have that 1.5-day offset folded in,
// so every element is a + b * d with d counted from J2000. Degrees, degrees
// per day, and Earth radii.

/// Days between Schlyter's element epoch and J2000.
pub const MOON_EPOCH_OFFSET_DAYS: f64 = 1.5;
/// Longitude of the ascending node.
pub const MOON_NODE_0: f64 = 125.1228 - 0.0529538083 * MOON_EPOCH_OFFSET_DAYS;
pub const MOON_NODE_1: f64 = -0.0529538083;
/// Inclination to the ecliptic.
pub const MOON_INCLINATION: f64 = 5.1454;
/// Argument of perigee.
pub const MOON_PERIGEE_0: f64 = 318.0634 + 0.1643573223 * MOON_EPOCH_OFFSET_DAYS;
pub const MOON_PERIGEE_1: f64 = 0.1643573223;
/// Mean distance in Earth radii.
pub const MOON_SEMI_MAJOR_AXIS: f64 = 60.2666;
/// Eccentricity.
pub const MOON_ECCENTRICITY: f64 = 0.054900;
/// Mean anomaly.
pub const MOON_MEAN_ANOMALY_0: f64 = 115.3654 + 13.0649929509 * MOON_EPOCH_OFFSET_DAYS;
pub const MOON_MEAN_ANOMALY_1: f64 = 13.0649929509;

/// Upper bound on Newton steps for Kepler's equation.
pub const KEPLER_MAX_ITERATIONS: usize = 9;
/// Newton steps stop once the correction is below this many radians.
pub const KEPLER_TOLERANCE: f64 = 1e-6;

// # CLI

/// Exit code for successful termination.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failures reported to the user.
pub const EXIT_FAILURE: i32 = 1;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "waqt.toml";
/// Name of the application's configuration directory.
pub const CONFIG_DIR_NAME: &str = "waqt";
