//! Default configuration file creation.
//!
//! The file is assembled with a small builder that aligns the trailing
//! comments of every setting into one column.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::loading::display_path;
use super::method::{AsrMethod, Method};
use crate::constants::*;

/// Write a commented default configuration to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", display_path(path)))?;

    log_block_start!("Created default configuration:");
    log_indented!("{}", display_path(path));

    Ok(())
}

pub(crate) fn default_config_content() -> String {
    let method_names = Method::ALL
        .iter()
        .map(|method| method.name())
        .collect::<Vec<_>>()
        .join(", ");
    let asr_names = AsrMethod::ALL
        .iter()
        .map(|method| method.name())
        .collect::<Vec<_>>()
        .join(", ");

    let content = ConfigBuilder::new()
        .add_section("Location")
        .add_setting(
            "latitude",
            &format!("{DEFAULT_LATITUDE:.6}"),
            &format!("Degrees north (-{MAXIMUM_LATITUDE} to {MAXIMUM_LATITUDE}, exclusive)"),
        )
        .add_setting(
            "longitude",
            &format!("{DEFAULT_LONGITUDE:.6}"),
            &format!("Degrees east ({MINIMUM_LONGITUDE} inclusive to {MAXIMUM_LONGITUDE} exclusive)"),
        )
        .add_setting(
            "utc_offset",
            &format!("{DEFAULT_UTC_OFFSET:.1}"),
            &format!("Hours from UTC ({MINIMUM_UTC_OFFSET} to {MAXIMUM_UTC_OFFSET})"),
        )
        .add_section("Method")
        .add_setting(
            "method",
            &format!("\"{}\"", Method::DEFAULT.name()),
            &format!("{method_names} (or 0-{})", Method::ALL.len() - 1),
        )
        .add_setting(
            "asr_method",
            &format!("\"{}\"", AsrMethod::DEFAULT.name()),
            &format!("{asr_names} (or 0-{})", AsrMethod::ALL.len() - 1),
        )
        .add_section("Adjustments")
        .add_setting(
            "adjust_minutes",
            &format!("{DEFAULT_ADJUST_MINUTES:?}"),
            "Fajr, sunrise, dhuhr, asr, maghrib, isha",
        )
        .build();

    format!("{content}\n")
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // Widest setting line plus one space sets the comment column
        let column = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut lines = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(column - line.len());
                    lines.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        lines.join("\n")
    }
}
