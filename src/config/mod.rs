//! Configuration system for waqt with validation and default substitution.
//!
//! This module owns everything between the user's intent and the validated,
//! immutable [`Configuration`] the calculator consumes.
//!
//! ## Configuration Sources
//!
//! - `$XDG_CONFIG_HOME/waqt/waqt.toml`, or `<dir>/waqt.toml` when a custom
//!   directory is set with `--config <dir>`
//! - A commented default file is created when none exists
//! - Library callers can skip files entirely and call [`configure`]
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Location]
//! latitude = 21.422517    # Degrees north (-90 to 90, exclusive)
//! longitude = 39.826166   # Degrees east (-180 inclusive to 180 exclusive)
//! utc_offset = 3.0        # Hours from UTC (-13 to 15)
//!
//! #[Method]
//! method = "Karachi"      # Karachi, ISNA, MWL, Makkah, Egypt (or 0-4)
//! asr_method = "Shafii"   # Shafii, Hanafi (or 0-1)
//!
//! #[Adjustments]
//! adjust_minutes = [0, 0, 0, 0, 0, 0] # Fajr, sunrise, dhuhr, asr, maghrib, isha
//! ```
//!
//! ## Validation
//!
//! Invalid values never produce errors. Each field is either accepted as
//! given or replaced wholesale by its documented default (a location is
//! never clamped, an adjustment list is never partially repaired). The file
//! layer warns about every replaced field.

pub mod builder;
pub mod loading;
pub mod method;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::constants::*;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};
pub use method::{AsrMethod, IshaRule, Method, Selector};
pub use validation::{Validated, configure};


/// Geographic position of the observer, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

/// A configuration field that can be substituted by its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Location,
    UtcOffset,
    Method,
    AsrMethod,
    AdjustMinutes,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Location => "latitude/longitude",
            Field::UtcOffset => "utc_offset",
            Field::Method => "method",
            Field::AsrMethod => "asr_method",
            Field::AdjustMinutes => "adjust_minutes",
        }
    }
}

/// Angle parameters and adjustments fixed by the method selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationSettings {
    fajr_angle: f64,
    isha: IshaRule,
    asr_shadow_factor: u8,
    adjust_minutes: [i64; ADJUSTABLE_EVENTS],
}

impl CalculationSettings {
    pub fn new(method: Method, asr_method: AsrMethod, adjust_minutes: [i64; ADJUSTABLE_EVENTS]) -> Self {
        Self {
            fajr_angle: method.fajr_angle(),
            isha: method.isha(),
            asr_shadow_factor: asr_method.shadow_factor(),
            adjust_minutes,
        }
    }

    /// Solar altitude at fajr, degrees.
    pub fn fajr_angle(&self) -> f64 {
        self.fajr_angle
    }

    pub fn isha(&self) -> IshaRule {
        self.isha
    }

    pub fn asr_shadow_factor(&self) -> u8 {
        self.asr_shadow_factor
    }

    /// Per-event adjustments in minutes: fajr, sunrise, noon, asr, sunset, isha.
    pub fn adjust_minutes(&self) -> [i64; ADJUSTABLE_EVENTS] {
        self.adjust_minutes
    }
}

/// Validated, immutable input of a [`crate::Calculator`].
///
/// Produced only by [`configure`], so every value in it satisfies the
/// documented ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    location: Location,
    utc_offset: f64,
    method: Method,
    asr_method: AsrMethod,
    settings: CalculationSettings,
    defaulted: Vec<Field>,
}

impl Configuration {
    pub fn location(&self) -> Location {
        self.location
    }

    /// Hours from UTC.
    pub fn utc_offset(&self) -> f64 {
        self.utc_offset
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn asr_method(&self) -> AsrMethod {
        self.asr_method
    }

    pub fn settings(&self) -> &CalculationSettings {
        &self.settings
    }

    /// Fields whose supplied value was invalid and replaced by the default.
    /// Fields that were simply left unset are not listed.
    pub fn defaulted(&self) -> &[Field] {
        &self.defaulted
    }
}

impl Default for Configuration {
    fn default() -> Self {
        configure(None, None, None, None, None)
    }
}

/// Contents of `waqt.toml`. Every field is optional; missing fields take
/// their defaults when the file is resolved.
///
/// Values are kept as written so that a value of the wrong type is reported
/// and defaulted like any other invalid value instead of failing the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    pub latitude: Option<toml::Value>,
    pub longitude: Option<toml::Value>,
    pub utc_offset: Option<toml::Value>, // hours
    pub method: Option<toml::Value>,
    pub asr_method: Option<toml::Value>,
    pub adjust_minutes: Option<toml::Value>, // fajr, sunrise, dhuhr, asr, maghrib, isha
}

/// A TOML number as degrees or hours. Anything else is NaN, which no
/// validator accepts.
fn number(value: &toml::Value) -> f64 {
    match value {
        toml::Value::Integer(number) => *number as f64,
        toml::Value::Float(number) => *number,
        _ => f64::NAN,
    }
}

/// An id or a name. Other types become a name no method carries.
fn selector(value: &toml::Value) -> Selector {
    match value {
        toml::Value::Integer(id) => Selector::Id(*id),
        toml::Value::String(name) => Selector::Name(name.clone()),
        other => Selector::Name(other.to_string()),
    }
}

fn shown(value: Option<&toml::Value>) -> String {
    value.map_or_else(|| "unset".to_string(), ToString::to_string)
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> anyhow::Result<Self> {
        load()
    }

    /// Whole-minute adjustments as written. Anything that is not a list of
    /// whole numbers yields an empty list, which validation rejects.
    fn adjust_minutes(&self) -> Option<Vec<i64>> {
        let value = self.adjust_minutes.as_ref()?;
        let minutes = value
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| match entry {
                        toml::Value::Integer(minutes) => Some(*minutes),
                        toml::Value::Float(minutes) if minutes.fract() == 0.0 => {
                            Some(*minutes as i64)
                        }
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
            })
            .unwrap_or_default()
            .unwrap_or_default();
        Some(minutes)
    }

    /// Validate the file contents into a [`Configuration`], warning about
    /// every value that had to be replaced.
    pub fn resolve(&self) -> Configuration {
        // Both coordinates are needed; a lone one is as good as an invalid one
        let location = match (&self.latitude, &self.longitude) {
            (Some(latitude), Some(longitude)) => {
                Some(Location::new(number(latitude), number(longitude)))
            }
            (None, None) => None,
            _ => Some(Location::new(f64::NAN, f64::NAN)),
        };

        let method = self.method.as_ref().map(selector);
        let asr_method = self.asr_method.as_ref().map(selector);

        let configuration = configure(
            location,
            self.utc_offset.as_ref().map(number),
            method.as_ref(),
            asr_method.as_ref(),
            self.adjust_minutes().as_deref(),
        );

        if !configuration.defaulted().is_empty() {
            log_pipe!();
        }
        for field in configuration.defaulted() {
            match field {
                Field::Location => log_warning!(
                    "Invalid or incomplete coordinates ({}, {}), using default location {DEFAULT_LATITUDE}, {DEFAULT_LONGITUDE}",
                    shown(self.latitude.as_ref()),
                    shown(self.longitude.as_ref())
                ),
                Field::UtcOffset => log_warning!(
                    "utc_offset {} must be a number of hours between {MINIMUM_UTC_OFFSET} and {MAXIMUM_UTC_OFFSET}, using {DEFAULT_UTC_OFFSET}",
                    shown(self.utc_offset.as_ref())
                ),
                Field::Method => log_warning!(
                    "Unknown method {}, using {}",
                    shown(self.method.as_ref()),
                    Method::DEFAULT.name()
                ),
                Field::AsrMethod => log_warning!(
                    "Unknown asr_method {}, using {}",
                    shown(self.asr_method.as_ref()),
                    AsrMethod::DEFAULT.name()
                ),
                Field::AdjustMinutes => log_warning!(
                    "adjust_minutes needs {ADJUSTABLE_EVENTS} values between -{MAXIMUM_ADJUST_MINUTES} and {MAXIMUM_ADJUST_MINUTES}, using no adjustments"
                ),
            }
        }

        configuration
    }
}

/// Log the effective configuration as a block.
pub fn log_configuration(configuration: &Configuration) {
    let location = configuration.location();
    let adjust = configuration.settings().adjust_minutes();

    log_block_start!("Configuration:");
    log_indented!(
        "Location: {:.4}°, {:.4}°",
        location.latitude,
        location.longitude
    );
    log_indented!("UTC offset: {:+}", configuration.utc_offset());
    log_indented!(
        "Method: {} (fajr {}°, isha {})",
        configuration.method().name(),
        configuration.settings().fajr_angle(),
        match configuration.settings().isha() {
            IshaRule::Angle(angle) => format!("{angle}°"),
            IshaRule::AfterSunset { minutes } => format!("sunset + {minutes} min"),
        }
    );
    log_indented!("Asr method: {}", configuration.asr_method().name());
    if adjust.iter().any(|minutes| *minutes != 0) {
        log_indented!("Adjustments (minutes): {:?}", adjust);
    }
}
