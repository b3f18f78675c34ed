//! Qibla command implementation.

use anyhow::Result;
use serde_json::json;

use crate::args::QueryOptions;
use crate::calculator::Calculator;

use super::{defaulted_names, print_json};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Handle the qibla command.
pub fn handle_qibla_command(calculator: &Calculator, options: &QueryOptions) -> Result<()> {
    let bearing = calculator.qibla_bearing();
    let location = calculator.configuration().location();

    if options.json {
        return print_json(&json!({
            "latitude": location.latitude,
            "longitude": location.longitude,
            "bearing": bearing,
            "compass": compass_point(bearing),
            "defaulted": defaulted_names(calculator.configuration()),
        }));
    }

    log_block_start!(
        "Qibla from {:.4}°, {:.4}°:",
        location.latitude,
        location.longitude
    );
    log_indented!("{:.2}° ({}) clockwise from true north", bearing, compass_point(bearing));
    log_end!();

    Ok(())
}

/// Nearest of the sixteen compass points.
pub fn compass_point(bearing: f64) -> &'static str {
    let sector = (bearing.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[sector]
}

/// Display detailed help for the qibla command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("qibla - Bearing of the Ka'aba");
    log_block_start!("Usage: waqt qibla [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-j, --json   Output in JSON format");
    log_block_start!("Notes:");
    log_indented!("The bearing is the initial great-circle course, in degrees");
    log_indented!("clockwise from true north. It does not depend on the time.");
    log_end!();
}
