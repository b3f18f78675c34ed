//! # waqt
//!
//! Prayer times, qibla bearing and sun/moon azimuth from a location and an
//! instant.
//!
//! This library backs the `waqt` binary and can be used on its own: build a
//! [`Configuration`] with [`configure`], wrap it in a [`Calculator`] and ask
//! it questions. Nothing here reads the clock or the filesystem except the
//! `config` file layer and the CLI `commands`.
//!
//! ## Architecture
//!
//! - **Engine**: `astro` holds the solar and lunar ephemerides, the
//!   altitude solver and the day frame. Pure functions, no I/O.
//! - **Timetable**: `calculator` turns a configuration and an instant into
//!   [`PrayerTimes`], a qibla bearing or an azimuth.
//! - **Configuration**: `config` validates user input with default
//!   substitution and loads `waqt.toml`.
//! - **CLI**: `args` and `commands` parse the command line and print results.
//! - **Infrastructure**: `logger` for the decorated output style.
//!
//! ```
//! use waqt::{Calculator, Location, configure};
//!
//! let calculator = Calculator::new(configure(
//!     Some(Location::new(51.5074, -0.1278)),
//!     Some(0.0),
//!     None,
//!     None,
//!     None,
//! ));
//! let bearing = calculator.qibla_bearing();
//! assert!(bearing > 118.0 && bearing < 120.0);
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod astro;
pub mod calculator;
pub mod commands;
pub mod config;
pub mod constants;

pub use astro::AccuracyTier;
pub use calculator::{Calculator, EventTime, Prayer, PrayerTimes};
pub use config::{Configuration, Location, configure};
