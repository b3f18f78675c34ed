//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. A command (`times`, `qibla`,
//! `sun`, `moon`, `help`) may appear anywhere among the flags; without one,
//! `times` is assumed.

use crate::astro::AccuracyTier;

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query {
    /// Prayer timetable of the day containing the instant
    Times,
    /// Bearing of the Ka'aba
    Qibla,
    /// Sun azimuth at the instant
    Sun,
    /// Moon azimuth at the instant
    Moon { tier: AccuracyTier },
}

/// Flags shared by every query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Instant as typed by the user; `None` means now
    pub at: Option<String>,
    pub json: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Evaluate a query against the loaded configuration
    Run { query: Query, options: QueryOptions },
    /// Help subcommand, optionally for one command
    HelpCommand { command: Option<String> },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Version takes
    /// precedence over help, and help over everything else.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = QueryOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut tier: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();
        let mut error_found = false;

        let mut args = args.into_iter().skip(1).map(|s| s.as_ref().to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" | "-d" => options.debug_enabled = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--json" | "-j" => options.json = true,
                "--config" | "-c" | "--at" | "-a" | "--tier" | "-t" => {
                    let Some(value) = args.next() else {
                        log_warning_standalone!("Missing value for {}", arg);
                        error_found = true;
                        continue;
                    };
                    match arg.as_str() {
                        "--config" | "-c" => options.config_dir = Some(value),
                        "--at" | "-a" => options.at = Some(value),
                        _ => tier = Some(value),
                    }
                }
                _ if arg.starts_with('-') => {
                    log_warning_standalone!("Unknown argument: {}", arg);
                    error_found = true;
                }
                _ => positionals.push(arg),
            }
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if error_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let mut positionals = positionals.into_iter();
        let command = positionals.next();

        if matches!(command.as_deref(), Some("help") | Some("h")) {
            let topic = positionals.next();
            if let Some(extra) = positionals.next() {
                log_warning_standalone!("Unexpected argument: {}", extra);
                return ParsedArgs {
                    action: CliAction::ShowHelpDueToError,
                };
            }
            return ParsedArgs {
                action: CliAction::HelpCommand { command: topic },
            };
        }

        if let Some(extra) = positionals.next() {
            log_warning_standalone!("Unexpected argument: {}", extra);
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let query = match command.as_deref() {
            None | Some("times") | Some("t") => Query::Times,
            Some("qibla") | Some("q") => Query::Qibla,
            Some("sun") | Some("s") => Query::Sun,
            Some("moon") | Some("m") => Query::Moon {
                tier: AccuracyTier::DEFAULT,
            },
            Some(other) => {
                log_warning_standalone!("Unknown command: {}", other);
                return ParsedArgs {
                    action: CliAction::ShowHelpDueToError,
                };
            }
        };

        let query = match (query, tier) {
            (query, None) => query,
            (Query::Moon { .. }, Some(tier)) => match tier.parse::<i64>() {
                Ok(index) => Query::Moon {
                    tier: AccuracyTier::from_index(index),
                },
                Err(_) => {
                    log_warning_standalone!("Invalid tier '{}', expected 0-3", tier);
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
            },
            (_, Some(_)) => {
                log_warning_standalone!("--tier only applies to the moon command");
                return ParsedArgs {
                    action: CliAction::ShowHelpDueToError,
                };
            }
        };

        ParsedArgs {
            action: CliAction::Run { query, options },
        }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("waqt [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-a, --at <instant>     Evaluate at this instant instead of now");
    log_indented!("                       Unix seconds, RFC 3339, or \"YYYY-MM-DD HH:MM:SS\"");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Show the configuration and day frame");
    log_indented!("-h, --help             Print help information");
    log_indented!("-j, --json             Print the result as JSON");
    log_indented!("-t, --tier <0-3>       Lunar accuracy tier (moon only, default 3)");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("times, t               Prayer times of the day (default)");
    log_indented!("qibla, q               Bearing of the Ka'aba");
    log_indented!("sun, s                 Azimuth of the sun");
    log_indented!("moon, m                Azimuth of the moon");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(query: Query, options: QueryOptions) -> CliAction {
        CliAction::Run { query, options }
    }

    #[test]
    fn test_parse_no_args() {
        let args = vec!["waqt"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(parsed.action, run(Query::Times, QueryOptions::default()));
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = vec!["waqt", "--debug"];
        let parsed = ParsedArgs::parse(args);
        assert_eq!(
            parsed.action,
            run(
                Query::Times,
                QueryOptions {
                    debug_enabled: true,
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_parse_help_flag() {
        for flag in ["--help", "-h"] {
            let parsed = ParsedArgs::parse(vec!["waqt", flag]);
            assert_eq!(parsed.action, CliAction::ShowHelp);
        }
    }

    #[test]
    fn test_parse_version_short_flags() {
        for flag in ["--version", "-V", "-v"] {
            let parsed = ParsedArgs::parse(vec!["waqt", flag]);
            assert_eq!(parsed.action, CliAction::ShowVersion);
        }
    }

    #[test]
    fn test_version_takes_precedence() {
        let parsed = ParsedArgs::parse(vec!["waqt", "--help", "--version", "moon"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let parsed = ParsedArgs::parse(vec!["waqt", "--unknown"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_commands_and_aliases() {
        let cases = [
            ("times", Query::Times),
            ("t", Query::Times),
            ("qibla", Query::Qibla),
            ("q", Query::Qibla),
            ("sun", Query::Sun),
            ("s", Query::Sun),
            (
                "moon",
                Query::Moon {
                    tier: AccuracyTier::Full,
                },
            ),
        ];
        for (command, query) in cases {
            let parsed = ParsedArgs::parse(vec!["waqt", command]);
            assert_eq!(parsed.action, run(query, QueryOptions::default()), "{command}");
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let parsed = ParsedArgs::parse(vec!["waqt", "tomorrow"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_flags_before_and_after_command() {
        let parsed = ParsedArgs::parse(vec![
            "waqt",
            "--config",
            "/tmp/waqt",
            "sun",
            "--at",
            "2024-03-20T06:06:00+03:00",
            "-j",
        ]);
        assert_eq!(
            parsed.action,
            run(
                Query::Sun,
                QueryOptions {
                    debug_enabled: false,
                    config_dir: Some("/tmp/waqt".to_string()),
                    at: Some("2024-03-20T06:06:00+03:00".to_string()),
                    json: true,
                }
            )
        );
    }

    #[test]
    fn test_negative_instant_is_a_value() {
        let parsed = ParsedArgs::parse(vec!["waqt", "times", "--at", "-86400"]);
        assert_eq!(
            parsed.action,
            run(
                Query::Times,
                QueryOptions {
                    at: Some("-86400".to_string()),
                    ..Default::default()
                }
            )
        );
    }

    #[test]
    fn test_moon_tier() {
        let parsed = ParsedArgs::parse(vec!["waqt", "moon", "--tier", "1"]);
        assert_eq!(
            parsed.action,
            run(
                Query::Moon {
                    tier: AccuracyTier::Kepler
                },
                QueryOptions::default()
            )
        );

        // Out-of-range tiers fall back to the default tier
        let parsed = ParsedArgs::parse(vec!["waqt", "m", "-t", "9"]);
        assert_eq!(
            parsed.action,
            run(
                Query::Moon {
                    tier: AccuracyTier::Full
                },
                QueryOptions::default()
            )
        );
    }

    #[test]
    fn test_invalid_tier_usage() {
        let parsed = ParsedArgs::parse(vec!["waqt", "moon", "--tier", "high"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);

        let parsed = ParsedArgs::parse(vec!["waqt", "sun", "--tier", "2"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_missing_flag_value() {
        let parsed = ParsedArgs::parse(vec!["waqt", "times", "--at"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_multiple_commands_rejected() {
        let parsed = ParsedArgs::parse(vec!["waqt", "sun", "moon"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_help_subcommand() {
        let parsed = ParsedArgs::parse(vec!["waqt", "help"]);
        assert_eq!(parsed.action, CliAction::HelpCommand { command: None });

        let parsed = ParsedArgs::parse(vec!["waqt", "help", "moon"]);
        assert_eq!(
            parsed.action,
            CliAction::HelpCommand {
                command: Some("moon".to_string())
            }
        );
    }
}
