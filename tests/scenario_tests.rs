use serial_test::serial;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use waqt::config::{Config, Field, Method, load_from_path};
use waqt::logger::Log;
use waqt::{Calculator, EventTime, Location, configure};

/// 2024-03-20 03:06 UTC, the March equinox
const EQUINOX_2024: i64 = 1_710_903_960;
/// 2023-12-22 03:27 UTC, the December solstice
const SOLSTICE_2023: i64 = 1_703_215_620;

fn makkah() -> Calculator {
    Calculator::new(configure(
        Some(Location::new(21.3891, 39.8579)),
        Some(3.0),
        None,
        None,
        None,
    ))
}

/// Run `f` with log output captured, returning what was logged.
fn capture_log<F: FnOnce()>(f: F) -> String {
    let captured = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&captured);
    Log::set_hook(move |text| {
        if let Ok(mut buffer) = sink.lock() {
            buffer.push_str(text);
        }
    });
    f();
    Log::clear_hook();

    let output = captured.lock().unwrap().clone();
    output
}

#[test]
fn test_makkah_equinox_through_public_api() {
    let times = makkah().prayer_times(EQUINOX_2024);

    assert_eq!(
        times.as_array(),
        [
            Some(1_710_882_000),
            Some(1_710_900_606),
            Some(1_710_905_045),
            Some(1_710_926_875),
            Some(1_710_939_167),
            Some(1_710_948_705),
            Some(1_710_953_144),
            Some(1_710_970_066),
        ]
    );
    assert_eq!(times.fajr, EventTime::At(1_710_900_606));
}

#[test]
fn test_prayer_times_json_shape() {
    let times = makkah().prayer_times(EQUINOX_2024);
    let json = serde_json::to_value(times).unwrap();

    for key in [
        "base",
        "fajr",
        "sunrise",
        "noon",
        "asr",
        "sunset",
        "isha",
        "next_midnight",
    ] {
        assert!(json[key].is_i64(), "{key} should be a number");
    }
}

#[test]
fn test_polar_night_reports_missing_events() {
    let tromso = Calculator::new(configure(
        Some(Location::new(69.6492, 18.9553)),
        Some(1.0),
        None,
        None,
        None,
    ));
    let times = tromso.prayer_times(SOLSTICE_2023);

    assert_eq!(times.sunrise, EventTime::Unreachable);
    assert_eq!(times.sunset, EventTime::Unreachable);
    assert!(times.base < times.noon && times.noon < times.next_midnight);

    let json = serde_json::to_value(times).unwrap();
    assert!(json["sunrise"].is_null());
    assert!(json["fajr"].is_i64());
}

#[test]
#[serial]
fn test_config_file_round_trip() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("waqt.toml");
    fs::write(
        &path,
        r#"
        latitude = 51.5074
        longitude = -0.1278
        utc_offset = 0
        method = "MWL"
        asr_method = "hanafi"
        adjust_minutes = [0, 0, 1, 0, 0, 0]
        "#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    let mut resolved = None;
    let output = capture_log(|| resolved = Some(config.resolve()));
    let configuration = resolved.unwrap();

    assert!(output.is_empty(), "{output}");

    assert_eq!(configuration.method(), Method::Mwl);
    assert!(configuration.defaulted().is_empty());

    let calculator = Calculator::new(configuration);
    assert!((calculator.qibla_bearing() - 118.9872).abs() < 1e-3);
}

#[test]
#[serial]
fn test_invalid_config_values_warn_and_default() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("waqt.toml");
    fs::write(
        &path,
        r#"
        latitude = 123.0
        longitude = 10.0
        method = 42
        "#,
    )
    .unwrap();

    let config: Config = load_from_path(&path).unwrap();
    let mut resolved = None;
    let output = capture_log(|| resolved = Some(config.resolve()));
    let configuration = resolved.unwrap();

    assert_eq!(configuration.location(), Location::default());
    assert_eq!(configuration.method(), Method::Karachi);
    assert_eq!(configuration.defaulted(), &[Field::Location, Field::Method]);

    assert!(output.contains("[WARNING]"), "{output}");
    assert!(output.contains("Unknown method 42"), "{output}");
    // Hooked output has its color codes stripped
    assert!(!output.contains('\x1b'));
}

#[test]
#[serial]
fn test_disabled_logger_stays_silent() {
    let config: Config = toml::from_str("utc_offset = 99").unwrap();

    Log::set_enabled(false);
    let mut resolved = None;
    let output = capture_log(|| resolved = Some(config.resolve()));
    Log::set_enabled(true);

    assert!(output.is_empty());
    assert_eq!(resolved.unwrap().defaulted(), &[Field::UtcOffset]);
}
