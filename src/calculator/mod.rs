//! Prayer timetable scheduling and the calculator context.
//!
//! [`Calculator`] owns a validated [`Configuration`] and answers every
//! question about a location: the prayer timetable of the solar day that
//! contains an instant, the qibla bearing, and the azimuths of the sun and
//! moon. Nothing is cached; each call recomputes from the configuration and
//! the instant it is given.
//!
//! ## Timetable
//!
//! Each altitude-based event is found from mean noon of the resolved day:
//! the solver offset is subtracted (morning events) or added (afternoon
//! events), then the equation of time at the resulting instant is removed.
//! Instants are rounded to the nearest second before the per-event minute
//! adjustments are applied.

use serde::Serialize;

use crate::astro::bearing::qibla;
use crate::astro::frame::DayFrame;
use crate::astro::lunar::{AccuracyTier, moon_azimuth};
use crate::astro::solar::{declination, equation_of_time, sun_altitude, sun_azimuth};
use crate::astro::solver::{SunTime, sun_time};
use crate::config::{Configuration, IshaRule};
use crate::constants::*;

#[cfg(test)]
mod tests;

/// A prayer event that the sun may fail to produce on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventTime {
    /// Unix seconds, UTC.
    At(i64),
    /// The sun never reaches the event's altitude on this day.
    Unreachable,
}

impl EventTime {
    pub fn instant(self) -> Option<i64> {
        match self {
            EventTime::At(instant) => Some(instant),
            EventTime::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, EventTime::At(_))
    }

    fn from_seconds(seconds: Option<f64>) -> Self {
        match seconds {
            Some(seconds) => EventTime::At(seconds.round() as i64),
            None => EventTime::Unreachable,
        }
    }

    fn adjusted(self, minutes: i64) -> Self {
        match self {
            EventTime::At(instant) => EventTime::At(instant + minutes * 60),
            EventTime::Unreachable => EventTime::Unreachable,
        }
    }
}

/// The six adjustable events, in timetable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; ADJUSTABLE_EVENTS] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Slot of this event in the adjustment list.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Timetable of one solar day.
///
/// `base`, `noon` and `next_midnight` always exist. The altitude-based
/// events do not at high latitudes; see [`EventTime::Unreachable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerTimes {
    /// Local 0:00 of the civil day the timetable belongs to.
    pub base: i64,
    pub fajr: EventTime,
    pub sunrise: EventTime,
    /// Apparent solar noon (dhuhr).
    pub noon: i64,
    pub asr: EventTime,
    /// Sunset (maghrib).
    pub sunset: EventTime,
    pub isha: EventTime,
    /// Apparent solar midnight closing the day.
    pub next_midnight: i64,
}

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> EventTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => EventTime::At(self.noon),
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.sunset,
            Prayer::Isha => self.isha,
        }
    }

    /// `[base, fajr, sunrise, noon, asr, sunset, isha, next_midnight]`.
    pub fn as_array(&self) -> [Option<i64>; 8] {
        [
            Some(self.base),
            self.fajr.instant(),
            self.sunrise.instant(),
            Some(self.noon),
            self.asr.instant(),
            self.sunset.instant(),
            self.isha.instant(),
            Some(self.next_midnight),
        ]
    }

    /// Whether every event of the day exists.
    pub fn is_complete(&self) -> bool {
        Prayer::ALL
            .iter()
            .all(|prayer| self.get(*prayer).is_reachable())
    }
}

/// Computation context for one validated configuration.
///
/// # Examples
///
/// ```
/// use waqt::{Calculator, config::{Location, configure}};
///
/// let configuration = configure(Some(Location::new(21.3891, 39.8579)), Some(3.0), None, None, None);
/// let calculator = Calculator::new(configuration);
///
/// let times = calculator.prayer_times(1_710_903_960);
/// assert!(times.is_complete());
/// assert!((0.0..360.0).contains(&calculator.qibla_bearing()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    configuration: Configuration,
}

impl Calculator {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Civil day base, mean noon and apparent midnights of the solar day
    /// containing `instant`.
    pub fn day_frame(&self, instant: i64) -> DayFrame {
        DayFrame::resolve(
            instant,
            self.configuration.location().longitude,
            self.configuration.utc_offset(),
        )
    }

    /// Timetable of the solar day containing `instant` (Unix seconds).
    pub fn prayer_times(&self, instant: i64) -> PrayerTimes {
        let frame = self.day_frame(instant);
        let settings = self.configuration.settings();
        let latitude = self.configuration.location().latitude;
        let midday = frame.midday;

        let fajr = morning_event(settings.fajr_angle(), midday, latitude);
        let sunrise = morning_event(SUNSET_ALTITUDE, midday, latitude);
        let noon = midday - equation_of_time(midday);
        let asr = afternoon_event(
            asr_altitude(settings.asr_shadow_factor(), midday, latitude),
            midday,
            latitude,
        );
        let sunset = afternoon_event(SUNSET_ALTITUDE, midday, latitude);
        let isha = match settings.isha() {
            IshaRule::Angle(angle) => afternoon_event(angle, midday, latitude),
            IshaRule::AfterSunset { minutes } => {
                sunset.map(|sunset| sunset + f64::from(minutes) * 60.0)
            }
        };

        let adjust = settings.adjust_minutes();
        let event = |seconds: Option<f64>, prayer: Prayer| {
            EventTime::from_seconds(seconds).adjusted(adjust[prayer.index()])
        };

        PrayerTimes {
            base: frame.base.round() as i64,
            fajr: event(fajr, Prayer::Fajr),
            sunrise: event(sunrise, Prayer::Sunrise),
            noon: noon.round() as i64 + adjust[Prayer::Dhuhr.index()] * 60,
            asr: event(asr, Prayer::Asr),
            sunset: event(sunset, Prayer::Maghrib),
            isha: event(isha, Prayer::Isha),
            next_midnight: frame.next_midnight.round() as i64,
        }
    }

    /// Bearing of the Ka'aba in degrees clockwise from north, `[0, 360)`.
    pub fn qibla_bearing(&self) -> f64 {
        let location = self.configuration.location();
        qibla(location.latitude, location.longitude)
    }

    /// Azimuth of the sun at `instant`, degrees clockwise from north.
    pub fn sun_azimuth(&self, instant: i64) -> f64 {
        let location = self.configuration.location();
        sun_azimuth(instant as f64, location.latitude, location.longitude)
    }

    /// Geometric altitude of the sun at `instant`, degrees.
    pub fn sun_altitude(&self, instant: i64) -> f64 {
        let location = self.configuration.location();
        sun_altitude(instant as f64, location.latitude, location.longitude)
    }

    /// Azimuth of the moon at `instant`, degrees clockwise from north.
    pub fn moon_azimuth(&self, instant: i64, tier: AccuracyTier) -> f64 {
        let location = self.configuration.location();
        moon_azimuth(instant as f64, location.latitude, location.longitude, tier)
    }
}

/// Instant before noon at which the sun rises through `altitude`.
fn morning_event(altitude: f64, midday: f64, latitude: f64) -> Option<f64> {
    sun_time(altitude, midday, latitude)
        .seconds()
        .map(|offset| apparent(midday - offset))
}

/// Instant after noon at which the sun sets through `altitude`.
fn afternoon_event(altitude: f64, midday: f64, latitude: f64) -> Option<f64> {
    match sun_time(altitude, midday, latitude) {
        SunTime::Offset(offset) => Some(apparent(midday + offset)),
        SunTime::Unreachable => None,
    }
}

/// Shift a mean-time instant onto apparent solar time.
fn apparent(mean: f64) -> f64 {
    mean - equation_of_time(mean)
}

/// Solar altitude in degrees at which an object's shadow reaches its noon
/// shadow plus `shadow_factor + 1` lengths.
fn asr_altitude(shadow_factor: u8, midday: f64, latitude: f64) -> f64 {
    let zenith_distance = (latitude.to_radians() - declination(midday)).abs();
    let shadow = f64::from(shadow_factor) + 1.0 + zenith_distance.tan();
    1.0_f64.atan2(shadow).to_degrees()
}
