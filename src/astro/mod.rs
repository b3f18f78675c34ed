//! Astronomical engine.
//!
//! Everything needed to turn a location and an instant into solar and lunar
//! quantities, without I/O, clocks or shared state.
//!
//! ## Module Structure
//!
//! - [`time`]: Julian date conversions
//! - [`solar`]: Low-precision solar ephemeris (longitude, declination, right
//!   ascension, equation of time, sidereal time, azimuth)
//! - [`solver`]: Two-pass altitude-to-time solver
//! - [`frame`]: Civil day base, mean noon and apparent midnight
//! - [`lunar`]: Orbital-element lunar position with accuracy tiers
//! - [`bearing`]: Great-circle and horizontal bearings
//!
//! ## Extreme latitudes
//!
//! No high-latitude correction is applied. When the sun never reaches an
//! altitude on a given day, [`solver::sun_time`] reports
//! [`SunTime::Unreachable`] instead of a number.

pub mod bearing;
pub mod frame;
pub mod lunar;
pub mod solar;
pub mod solver;
pub mod time;

pub use bearing::{bearing, celestial_azimuth, normalize_degrees, qibla};
pub use frame::DayFrame;
pub use lunar::{AccuracyTier, MoonPosition, moon_azimuth, moon_position};
pub use solar::{equation_of_time, sun_altitude, sun_azimuth};
pub use solver::{SunTime, sun_time};
pub use time::{julian_centuries, julian_date, unix_from_julian};
