//! Field validation with default substitution.
//!
//! Every validator answers with a [`Validated`] instead of an error: the
//! value is accepted as given, absent, or replaced by its default. The
//! calculator never sees an out-of-range value and callers never have to
//! handle a failure.

use super::method::{AsrMethod, Method, Selector};
use super::{CalculationSettings, Configuration, Field, Location};
use crate::constants::*;

/// Outcome of validating one configuration field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validated<T> {
    /// The supplied value was in range.
    Accepted(T),
    /// Nothing was supplied; the default applies.
    Unset(T),
    /// The supplied value was invalid and the default replaced it.
    Defaulted(T),
}

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        match self {
            Validated::Accepted(value) | Validated::Unset(value) | Validated::Defaulted(value) => {
                value
            }
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Validated::Defaulted(_))
    }
}

/// Accept a location only when latitude is strictly inside (-90, 90) and
/// longitude lies in [-180, 180). Otherwise both coordinates fall back
/// together; a location is never clamped.
pub fn validate_location(location: Option<Location>) -> Validated<Location> {
    let Some(location) = location else {
        return Validated::Unset(Location::default());
    };

    let latitude_ok = location.latitude.is_finite() && location.latitude.abs() < MAXIMUM_LATITUDE;
    let longitude_ok = location.longitude.is_finite()
        && (MINIMUM_LONGITUDE..MAXIMUM_LONGITUDE).contains(&location.longitude);

    if latitude_ok && longitude_ok {
        Validated::Accepted(location)
    } else {
        Validated::Defaulted(Location::default())
    }
}

/// Accept a UTC offset in hours within the bounds of real civil zones.
pub fn validate_utc_offset(offset: Option<f64>) -> Validated<f64> {
    match offset {
        None => Validated::Unset(DEFAULT_UTC_OFFSET),
        Some(hours)
            if hours.is_finite()
                && (MINIMUM_UTC_OFFSET..=MAXIMUM_UTC_OFFSET).contains(&hours) =>
        {
            Validated::Accepted(hours)
        }
        Some(_) => Validated::Defaulted(DEFAULT_UTC_OFFSET),
    }
}

pub fn validate_method(selector: Option<&Selector>) -> Validated<Method> {
    match selector {
        None => Validated::Unset(Method::DEFAULT),
        Some(selector) => Method::select(selector)
            .map(Validated::Accepted)
            .unwrap_or(Validated::Defaulted(Method::DEFAULT)),
    }
}

pub fn validate_asr_method(selector: Option<&Selector>) -> Validated<AsrMethod> {
    match selector {
        None => Validated::Unset(AsrMethod::DEFAULT),
        Some(selector) => AsrMethod::select(selector)
            .map(Validated::Accepted)
            .unwrap_or(Validated::Defaulted(AsrMethod::DEFAULT)),
    }
}

/// Accept exactly six adjustments, each within a day either way. Any bad
/// entry resets all six to zero.
pub fn validate_adjust_minutes(minutes: Option<&[i64]>) -> Validated<[i64; ADJUSTABLE_EVENTS]> {
    let Some(minutes) = minutes else {
        return Validated::Unset(DEFAULT_ADJUST_MINUTES);
    };

    if minutes
        .iter()
        .any(|m| m.unsigned_abs() > MAXIMUM_ADJUST_MINUTES.unsigned_abs())
    {
        return Validated::Defaulted(DEFAULT_ADJUST_MINUTES);
    }

    match <[i64; ADJUSTABLE_EVENTS]>::try_from(minutes) {
        Ok(minutes) => Validated::Accepted(minutes),
        Err(_) => Validated::Defaulted(DEFAULT_ADJUST_MINUTES),
    }
}

/// Build a [`Configuration`] from optional raw inputs.
///
/// Never fails. Absent or invalid fields take their defaults, and the
/// invalid ones are listed in [`Configuration::defaulted`].
///
/// # Examples
///
/// ```
/// use waqt::config::{Location, Method, Selector, configure};
///
/// let configuration = configure(
///     Some(Location::new(51.5, -0.12)),
///     Some(0.0),
///     Some(&Selector::from("isna")),
///     None,
///     None,
/// );
/// assert_eq!(configuration.method(), Method::Isna);
/// assert!(configuration.defaulted().is_empty());
/// ```
pub fn configure(
    location: Option<Location>,
    utc_offset: Option<f64>,
    method: Option<&Selector>,
    asr_method: Option<&Selector>,
    adjust_minutes: Option<&[i64]>,
) -> Configuration {
    let location = validate_location(location);
    let utc_offset = validate_utc_offset(utc_offset);
    let method = validate_method(method);
    let asr_method = validate_asr_method(asr_method);
    let adjust_minutes = validate_adjust_minutes(adjust_minutes);

    let defaulted = [
        (Field::Location, location.is_defaulted()),
        (Field::UtcOffset, utc_offset.is_defaulted()),
        (Field::Method, method.is_defaulted()),
        (Field::AsrMethod, asr_method.is_defaulted()),
        (Field::AdjustMinutes, adjust_minutes.is_defaulted()),
    ]
    .into_iter()
    .filter_map(|(field, defaulted)| defaulted.then_some(field))
    .collect();

    let method = method.into_inner();
    let asr_method = asr_method.into_inner();

    Configuration {
        location: location.into_inner(),
        utc_offset: utc_offset.into_inner(),
        method,
        asr_method,
        settings: CalculationSettings::new(method, asr_method, adjust_minutes.into_inner()),
        defaulted,
    }
}
