//! Times command implementation: the prayer timetable of one solar day.

use anyhow::Result;
use serde_json::json;

use crate::args::QueryOptions;
use crate::calculator::{Calculator, EventTime, Prayer, PrayerTimes};

use super::{defaulted_names, fixed_offset, format_instant, print_json};

/// Handle the times command for the solar day containing `instant`.
pub fn handle_times_command(
    calculator: &Calculator,
    instant: i64,
    options: &QueryOptions,
) -> Result<()> {
    let times = calculator.prayer_times(instant);
    let configuration = calculator.configuration();
    let offset = fixed_offset(configuration.utc_offset());

    if options.json {
        let local: serde_json::Map<String, serde_json::Value> = Prayer::ALL
            .iter()
            .map(|prayer| {
                let value = match times.get(*prayer) {
                    EventTime::At(at) => json!(format_instant(at, offset, "%H:%M:%S")),
                    EventTime::Unreachable => serde_json::Value::Null,
                };
                (prayer.name().to_lowercase(), value)
            })
            .collect();

        return print_json(&json!({
            "date": format_instant(times.base, offset, "%Y-%m-%d"),
            "utc_offset": configuration.utc_offset(),
            "method": configuration.method().name(),
            "asr_method": configuration.asr_method().name(),
            "times": times,
            "local": local,
            "defaulted": defaulted_names(configuration),
        }));
    }

    if options.debug_enabled {
        let frame = calculator.day_frame(instant);
        log_pipe!();
        log_debug!("Solar day frame (Unix seconds):");
        log_indented!("Civil day start:    {:.0}", frame.base);
        log_indented!("Apparent midnight:  {:.0}", frame.apparent_midnight);
        log_indented!("Mean noon:          {:.0}", frame.midday);
        log_indented!("Next midnight:      {:.0}", frame.next_midnight);
    }

    log_block_start!(
        "Prayer times for {} (UTC{}):",
        format_instant(times.base, offset, "%A %Y-%m-%d"),
        offset
    );
    for prayer in Prayer::ALL {
        log_indented!("{:<9} {}", prayer.name(), describe(times.get(prayer), offset));
    }
    log_indented!(
        "{:<9} {}",
        "Midnight",
        format_instant(times.next_midnight, offset, "%H:%M:%S")
    );

    if !times.is_complete() {
        log_pipe!();
        log_warning!("Some events do not occur on this day at this latitude");
    }
    if let Some(next) = next_event(&times, instant) {
        log_block_start!(
            "Next: {} at {}",
            next.name(),
            describe(times.get(next), offset)
        );
    }
    log_end!();

    Ok(())
}

fn describe(event: EventTime, offset: chrono::FixedOffset) -> String {
    match event {
        EventTime::At(at) => format_instant(at, offset, "%H:%M:%S"),
        EventTime::Unreachable => "--:--:--".to_string(),
    }
}

/// First event of the day still ahead of `instant`.
pub fn next_event(times: &PrayerTimes, instant: i64) -> Option<Prayer> {
    Prayer::ALL.into_iter().find(|prayer| {
        times
            .get(*prayer)
            .instant()
            .is_some_and(|at| at > instant)
    })
}

/// Display detailed help for the times command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("times - Prayer times of the solar day containing an instant");
    log_block_start!("Usage: waqt times [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-a, --at <instant>  Instant inside the wanted day (default: now)");
    log_indented!("-j, --json          Output in JSON format");
    log_indented!("-d, --debug         Also show the configuration and day frame");
    log_block_start!("Notes:");
    log_indented!("A day runs from one apparent solar midnight to the next,");
    log_indented!("so an instant shortly after midnight may belong to the previous date.");
    log_indented!("Events the sun never reaches on that day show as --:--:-- (null in JSON).");
    log_block_start!("Examples:");
    log_indented!("# Today's timetable");
    log_indented!("waqt times");
    log_pipe!();
    log_indented!("# A specific date, as JSON");
    log_indented!("waqt times --at 2024-03-20 --json");
    log_end!();
}
