use super::*;
use crate::config::{Location, Selector, configure};
use crate::constants::test_constants::*;

fn calculator_at(latitude: f64, longitude: f64, utc_offset: f64) -> Calculator {
    Calculator::new(configure(
        Some(Location::new(latitude, longitude)),
        Some(utc_offset),
        None,
        None,
        None,
    ))
}

fn makkah() -> Calculator {
    calculator_at(
        TEST_MAKKAH_LATITUDE,
        TEST_MAKKAH_LONGITUDE,
        TEST_MAKKAH_OFFSET,
    )
}

fn with_method(method: i64, asr_method: i64, adjust: Option<&[i64]>) -> Calculator {
    Calculator::new(configure(
        Some(Location::new(TEST_MAKKAH_LATITUDE, TEST_MAKKAH_LONGITUDE)),
        Some(TEST_MAKKAH_OFFSET),
        Some(&Selector::Id(method)),
        Some(&Selector::Id(asr_method)),
        adjust,
    ))
}

fn at(event: EventTime) -> i64 {
    event.instant().expect("event should be reachable")
}

#[test]
fn test_makkah_equinox_timetable() {
    // 2024-03-20 in UTC+3:
    // 00:00:00, 05:10:06, 06:24:05, 12:27:55, 15:52:47, 18:31:45, 19:45:44, 00:27:46
    let expected: [i64; 8] = [
        1_710_882_000,
        1_710_900_606,
        1_710_905_045,
        1_710_926_875,
        1_710_939_167,
        1_710_948_705,
        1_710_953_144,
        1_710_970_066,
    ];

    let times = makkah().prayer_times(TEST_EQUINOX_2024);

    assert_eq!(times.as_array(), expected.map(Some));
}

#[test]
fn test_timetable_is_ordered() {
    let times = makkah().prayer_times(TEST_EQUINOX_2024);
    let instants: Vec<i64> = times.as_array().iter().map(|x| x.unwrap()).collect();

    assert!(instants.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(times.is_complete());
}

#[test]
fn test_same_solar_day_gives_same_timetable() {
    let calculator = makkah();
    let frame = calculator.day_frame(TEST_EQUINOX_2024);

    let early = calculator.prayer_times(frame.apparent_midnight.ceil() as i64 + 1);
    let late = calculator.prayer_times(frame.next_midnight.floor() as i64 - 1);

    assert_eq!(early, late);
    assert_eq!(early, calculator.prayer_times(TEST_EQUINOX_2024));
}

#[test]
fn test_instant_after_apparent_midnight_moves_to_next_day() {
    let calculator = makkah();
    let today = calculator.prayer_times(TEST_EQUINOX_2024);
    let tomorrow = calculator.prayer_times(today.next_midnight + 60);

    assert_eq!(tomorrow.base, today.base + SECONDS_PER_DAY);
    assert!(tomorrow.noon > today.next_midnight);
}

#[test]
fn test_day_frame_contains_instant() {
    let frame = makkah().day_frame(TEST_EQUINOX_2024);
    let instant = TEST_EQUINOX_2024 as f64;

    assert!(frame.apparent_midnight <= instant);
    assert!(instant <= frame.next_midnight);
    assert!(frame.base < frame.midday && frame.midday < frame.next_midnight);
}

#[test]
fn test_adjustments_shift_exact_minutes() {
    let plain = with_method(0, 0, None).prayer_times(TEST_EQUINOX_2024);
    let adjust = [1, -2, 3, -4, 5, -6];
    let shifted = with_method(0, 0, Some(adjust.as_slice())).prayer_times(TEST_EQUINOX_2024);

    for prayer in Prayer::ALL {
        let delta = at(shifted.get(prayer)) - at(plain.get(prayer));
        assert_eq!(delta, adjust[prayer.index()] * 60, "{}", prayer.name());
    }

    // The day anchors are never adjusted
    assert_eq!(shifted.base, plain.base);
    assert_eq!(shifted.next_midnight, plain.next_midnight);
}

#[test]
fn test_makkah_isha_follows_unadjusted_sunset() {
    let plain = with_method(3, 0, None).prayer_times(TEST_EQUINOX_2024);
    let isha_gap = at(plain.isha) - at(plain.sunset);
    assert!((isha_gap - 90 * 60).abs() <= 1, "gap was {isha_gap}");

    // Moving maghrib does not drag isha along
    let adjusted =
        with_method(3, 0, Some([0, 0, 0, 0, 10, 0].as_slice())).prayer_times(TEST_EQUINOX_2024);
    assert_eq!(adjusted.isha, plain.isha);
    assert_eq!(at(adjusted.sunset), at(plain.sunset) + 600);
}

#[test]
fn test_method_angles_order_fajr() {
    let isna = with_method(1, 0, None).prayer_times(TEST_EQUINOX_2024);
    let karachi = with_method(0, 0, None).prayer_times(TEST_EQUINOX_2024);
    let egypt = with_method(4, 0, None).prayer_times(TEST_EQUINOX_2024);

    // A deeper angle means an earlier fajr and a later isha
    assert!(at(egypt.fajr) < at(karachi.fajr));
    assert!(at(karachi.fajr) < at(isna.fajr));
    assert!(at(karachi.isha) > at(isna.isha));
}

#[test]
fn test_hanafi_asr_is_later() {
    let shafii = with_method(0, 0, None).prayer_times(TEST_EQUINOX_2024);
    let hanafi = with_method(0, 1, None).prayer_times(TEST_EQUINOX_2024);

    assert!(at(hanafi.asr) > at(shafii.asr));
    assert!(at(hanafi.asr) < at(hanafi.sunset));
    assert_eq!(hanafi.noon, shafii.noon);
}

#[test]
fn test_polar_night_has_no_sunrise() {
    let tromso = calculator_at(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE, 1.0);
    let times = tromso.prayer_times(TEST_SOLSTICE_2023);

    assert_eq!(times.sunrise, EventTime::Unreachable);
    assert_eq!(times.sunset, EventTime::Unreachable);
    assert_eq!(times.asr, EventTime::Unreachable);
    // Twilight still reaches 18 degrees below the horizon
    assert!(times.fajr.is_reachable());
    assert!(times.isha.is_reachable());
    assert!(!times.is_complete());
}

#[test]
fn test_midnight_sun_has_no_fajr_or_isha() {
    let tromso = calculator_at(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE, 2.0);
    let times = tromso.prayer_times(TEST_SUMMER_SOLSTICE_2023);

    assert_eq!(times.fajr, EventTime::Unreachable);
    assert_eq!(times.sunrise, EventTime::Unreachable);
    assert_eq!(times.sunset, EventTime::Unreachable);
    assert_eq!(times.isha, EventTime::Unreachable);
    assert!(times.asr.is_reachable());
    assert!(times.base < times.noon && times.noon < times.next_midnight);
}

#[test]
fn test_southern_summer_at_seventy_degrees() {
    let calculator = calculator_at(-70.0, TEST_TROMSO_LONGITUDE, 2.0);
    let times = calculator.prayer_times(TEST_SOLSTICE_2023);

    assert_eq!(times.fajr, EventTime::Unreachable);
    assert_eq!(times.isha, EventTime::Unreachable);
}

#[test]
fn test_makkah_method_isha_unreachable_without_sunset() {
    let calculator = Calculator::new(configure(
        Some(Location::new(TEST_TROMSO_LATITUDE, TEST_TROMSO_LONGITUDE)),
        Some(1.0),
        Some(&Selector::from("Makkah")),
        None,
        None,
    ));
    let times = calculator.prayer_times(TEST_SOLSTICE_2023);

    assert_eq!(times.sunset, EventTime::Unreachable);
    assert_eq!(times.isha, EventTime::Unreachable);
    assert!(times.fajr.is_reachable());
}

#[test]
fn test_qibla_bearings() {
    // From the default location (Madinah) the Ka'aba lies just west of south
    let madinah = Calculator::new(configure(None, None, None, None, None));
    assert!((madinah.qibla_bearing() - 179.0333).abs() < 1e-3);

    let london = calculator_at(TEST_LONDON_LATITUDE, TEST_LONDON_LONGITUDE, 0.0);
    assert!((london.qibla_bearing() - 118.9872).abs() < 1e-3);
}

#[test]
fn test_sun_azimuth_through_the_day() {
    let calculator = makkah();
    let times = calculator.prayer_times(TEST_EQUINOX_2024);

    let sunrise = calculator.sun_azimuth(at(times.sunrise));
    let noon = calculator.sun_azimuth(times.noon);
    let sunset = calculator.sun_azimuth(at(times.sunset));

    // Near the equinox the sun rises due east and sets due west
    assert!((sunrise - 90.0).abs() < 1.5, "sunrise azimuth {sunrise}");
    assert!((noon - 180.0).abs() < 2.0, "noon azimuth {noon}");
    assert!((sunset - 270.0).abs() < 1.5, "sunset azimuth {sunset}");
}

#[test]
fn test_moon_azimuth_in_range_for_every_tier() {
    let calculator = makkah();
    for tier in AccuracyTier::ALL {
        for hours in 0..48 {
            let azimuth = calculator.moon_azimuth(TEST_EQUINOX_2024 + hours * 3600, tier);
            assert!((0.0..360.0).contains(&azimuth), "{tier:?}: {azimuth}");
        }
    }
}

#[test]
fn test_event_time_serialization() {
    assert_eq!(serde_json::to_string(&EventTime::At(42)).unwrap(), "42");
    assert_eq!(
        serde_json::to_string(&EventTime::Unreachable).unwrap(),
        "null"
    );

    let times = makkah().prayer_times(TEST_EQUINOX_2024);
    let json = serde_json::to_value(times).unwrap();
    assert_eq!(json["noon"], times.noon);
    assert_eq!(json["fajr"], at(times.fajr));
}

#[test]
fn test_sun_altitude_matches_event_angles() {
    let calculator = makkah();
    let times = calculator.prayer_times(TEST_EQUINOX_2024);

    // Events land close to the altitudes that define them
    let cases = [
        (at(times.fajr), -18.0),
        (at(times.sunrise), SUNSET_ALTITUDE),
        (at(times.sunset), SUNSET_ALTITUDE),
        (at(times.isha), -18.0),
    ];
    for (instant, altitude) in cases {
        let actual = calculator.sun_altitude(instant);
        assert!((actual - altitude).abs() < 0.5, "{instant}: {actual}");
    }

    // Near the equinox the noon sun stands at the colatitude
    let noon = calculator.sun_altitude(times.noon);
    assert!((noon - (90.0 - TEST_MAKKAH_LATITUDE)).abs() < 0.5, "{noon}");
}
