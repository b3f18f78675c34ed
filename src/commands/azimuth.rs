//! Sun and moon commands: where a body stands on the horizon at an instant.

use anyhow::Result;
use serde_json::json;

use crate::args::QueryOptions;
use crate::astro::AccuracyTier;
use crate::calculator::Calculator;

use super::qibla::compass_point;
use super::{defaulted_names, fixed_offset, format_instant, print_json};

/// Handle the sun command.
pub fn handle_sun_command(
    calculator: &Calculator,
    instant: i64,
    options: &QueryOptions,
) -> Result<()> {
    let azimuth = calculator.sun_azimuth(instant);

    if options.json {
        return print_json(&json!({
            "instant": instant,
            "azimuth": azimuth,
            "altitude": calculator.sun_altitude(instant),
            "defaulted": defaulted_names(calculator.configuration()),
        }));
    }

    log_block_start!("Sun at {}:", when(calculator, instant));
    log_indented!("Azimuth:  {:.2}° ({})", azimuth, compass_point(azimuth));
    log_indented!("Altitude: {:.2}°", calculator.sun_altitude(instant));
    log_end!();

    Ok(())
}

/// Handle the moon command.
pub fn handle_moon_command(
    calculator: &Calculator,
    instant: i64,
    tier: AccuracyTier,
    options: &QueryOptions,
) -> Result<()> {
    let azimuth = calculator.moon_azimuth(instant, tier);

    if options.json {
        return print_json(&json!({
            "instant": instant,
            "azimuth": azimuth,
            "tier": tier.index(),
            "defaulted": defaulted_names(calculator.configuration()),
        }));
    }

    if options.debug_enabled {
        log_pipe!();
        log_debug!("Lunar model: tier {} ({})", tier.index(), tier.name());
    }

    log_block_start!("Moon at {}:", when(calculator, instant));
    log_indented!("Azimuth:  {:.2}° ({})", azimuth, compass_point(azimuth));
    log_end!();

    Ok(())
}

fn when(calculator: &Calculator, instant: i64) -> String {
    let offset = fixed_offset(calculator.configuration().utc_offset());
    format!(
        "{} (UTC{})",
        format_instant(instant, offset, "%Y-%m-%d %H:%M:%S"),
        offset
    )
}

/// Display detailed help for the sun command (help subcommand)
pub fn display_sun_help() {
    log_version!();
    log_block_start!("sun - Azimuth of the sun");
    log_block_start!("Usage: waqt sun [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-a, --at <instant>  Instant to evaluate (default: now)");
    log_indented!("-j, --json          Output in JSON format");
    log_block_start!("Notes:");
    log_indented!("Azimuth is measured clockwise from true north. Altitude is");
    log_indented!("geometric, without refraction.");
    log_end!();
}

/// Display detailed help for the moon command (help subcommand)
pub fn display_moon_help() {
    log_version!();
    log_block_start!("moon - Azimuth of the moon");
    log_block_start!("Usage: waqt moon [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-a, --at <instant>  Instant to evaluate (default: now)");
    log_indented!("-t, --tier <0-3>    Lunar model accuracy (default: 3)");
    log_indented!("-j, --json          Output in JSON format");
    log_block_start!("Tiers:");
    for tier in AccuracyTier::ALL {
        log_indented!("{}  {}", tier.index(), tier.name());
    }
    log_indented!("Out-of-range tiers use tier {}.", AccuracyTier::DEFAULT.index());
    log_end!();
}
