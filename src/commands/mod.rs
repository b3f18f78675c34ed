//! Command-line command handlers for waqt.
//!
//! Every query command follows the same flow: load and validate the
//! configuration, resolve the requested instant, evaluate, then print either
//! a decorated block or a single JSON object. Each command lives in its own
//! submodule.

pub mod azimuth;
pub mod help;
pub mod qibla;
pub mod times;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::args::{Query, QueryOptions};
use crate::calculator::Calculator;
use crate::config::{self, Config, Configuration};
use crate::logger::Log;


/// Accepted layouts for `--at` values without an explicit offset.
const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Run a query command end to end.
pub fn handle_query(query: Query, options: QueryOptions) -> Result<()> {
    // JSON goes to stdout unadorned; replaced fields are reported inside it
    if options.json {
        Log::set_enabled(false);
    } else {
        log_version!();
        if options.debug_enabled {
            log_pipe!();
            log_debug!("Debug mode enabled");
        }
    }

    config::set_config_dir(options.config_dir.clone())?;
    let calculator = load_calculator(options.debug_enabled)?;
    let offset = fixed_offset(calculator.configuration().utc_offset());
    let instant = resolve_instant(options.at.as_deref(), offset)?;

    match query {
        Query::Times => times::handle_times_command(&calculator, instant, &options),
        Query::Qibla => qibla::handle_qibla_command(&calculator, &options),
        Query::Sun => azimuth::handle_sun_command(&calculator, instant, &options),
        Query::Moon { tier } => azimuth::handle_moon_command(&calculator, instant, tier, &options),
    }
}

/// Load the configuration file and build a calculator from it.
fn load_calculator(debug_enabled: bool) -> Result<Calculator> {
    let config = Config::load()?;
    let configuration = config.resolve();

    if debug_enabled {
        let path = config::get_config_path()?;
        log_block_start!("Loaded configuration from:");
        log_indented!("{}", config::loading::display_path(&path));
        config::log_configuration(&configuration);
    }

    Ok(Calculator::new(configuration))
}

/// Fixed offset for a validated UTC offset in hours.
pub fn fixed_offset(utc_offset: f64) -> FixedOffset {
    FixedOffset::east_opt((utc_offset * 3600.0).round() as i32).unwrap_or_else(|| Utc.fix())
}

/// Turn an `--at` value into Unix seconds.
///
/// Accepts Unix seconds, RFC 3339, a local date and time in `offset`, or a
/// bare date, which means local noon of that date. `None` means now.
pub fn resolve_instant(at: Option<&str>, offset: FixedOffset) -> Result<i64> {
    let Some(text) = at.map(str::trim) else {
        return Ok(Utc::now().timestamp());
    };

    if let Ok(seconds) = text.parse::<i64>() {
        return Ok(seconds);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(datetime.timestamp());
    }

    let local = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(12, 0, 0))
        });

    match local {
        Some(local) => offset
            .from_local_datetime(&local)
            .single()
            .map(|datetime| datetime.timestamp())
            .with_context(|| format!("'{text}' does not exist in UTC{offset}")),
        None => bail!(
            "Invalid instant '{text}': expected Unix seconds, RFC 3339, or YYYY-MM-DD [HH:MM[:SS]]"
        ),
    }
}

/// Render Unix seconds as local wall-clock time.
pub fn format_instant(instant: i64, offset: FixedOffset, format: &str) -> String {
    match DateTime::from_timestamp(instant, 0) {
        Some(datetime) => datetime.with_timezone(&offset).format(format).to_string(),
        None => instant.to_string(),
    }
}

/// Field names that were replaced by their defaults, for JSON output.
pub(crate) fn defaulted_names(configuration: &Configuration) -> Vec<&'static str> {
    configuration
        .defaulted()
        .iter()
        .map(|field| field.as_str())
        .collect()
}

/// Print a JSON value as one line on stdout.
pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
