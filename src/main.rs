//! Main application entry point.
//!
//! Parses the command line and hands off to the command handlers in the
//! library. Every query is a single evaluation: load the configuration,
//! compute, print, exit.

use waqt::args::{self, CliAction, ParsedArgs};
use waqt::commands;
use waqt::constants::EXIT_FAILURE;
use waqt::{log_end, log_error_exit};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::HelpCommand { command } => commands::help::run_help_command(command.as_deref()),
        CliAction::Run { query, options } => commands::handle_query(query, options),
    };

    if let Err(error) = result {
        // JSON mode silences the logger, so errors go to stderr as well
        if waqt::logger::Log::is_enabled() {
            log_error_exit!("{:#}", error);
            log_end!();
        } else {
            eprintln!("{error:#}");
        }
        std::process::exit(EXIT_FAILURE);
    }
}
