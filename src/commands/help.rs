//! Help command implementation for waqt.
//!
//! This module provides a dispatcher for the help command that shows
//! command-specific help or general help based on the arguments provided.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("times") | Some("t") => super::times::display_help(),
        Some("qibla") | Some("q") => super::qibla::display_help(),
        Some("sun") | Some("s") => super::azimuth::display_sun_help(),
        Some("moon") | Some("m") => super::azimuth::display_moon_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("times, t           Prayer times of the day (default)");
    log_indented!("qibla, q           Bearing of the Ka'aba");
    log_indented!("sun, s             Azimuth of the sun");
    log_indented!("moon, m            Azimuth of the moon");
    log_indented!("help, h [COMMAND]  Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'waqt help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'waqt --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: waqt help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("waqt help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("waqt help times");
    log_indented!("waqt help moon");
    log_end!();
}
