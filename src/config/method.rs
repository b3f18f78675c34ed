//! Calculation methods and asr conventions.
//!
//! A method fixes the solar altitudes that open fajr and close isha. Each
//! variant carries its parameters; nothing else in the crate knows the
//! numbers.

use serde::{Deserialize, Serialize};

/// A method or asr convention as written by the user: a case-insensitive
/// name or a numeric id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Selector {
    Id(i64),
    Name(String),
}

impl From<i64> for Selector {
    fn from(id: i64) -> Self {
        Selector::Id(id)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "{id}"),
            Selector::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

/// How isha is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum IshaRule {
    /// The sun reaches this altitude (degrees, negative below the horizon).
    Angle(f64),
    /// A fixed interval after sunset.
    AfterSunset { minutes: u32 },
}

/// Twilight convention used for fajr and isha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Islamic Society of North America.
    Isna,
    /// Muslim World League.
    Mwl,
    /// Umm al-Qura, Makkah.
    Makkah,
    /// Egyptian General Authority of Survey.
    Egypt,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Karachi,
        Method::Isna,
        Method::Mwl,
        Method::Makkah,
        Method::Egypt,
    ];

    pub const DEFAULT: Method = Method::Karachi;

    pub fn id(self) -> i64 {
        match self {
            Method::Karachi => 0,
            Method::Isna => 1,
            Method::Mwl => 2,
            Method::Makkah => 3,
            Method::Egypt => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Karachi => "Karachi",
            Method::Isna => "ISNA",
            Method::Mwl => "MWL",
            Method::Makkah => "Makkah",
            Method::Egypt => "Egypt",
        }
    }

    /// Solar altitude at fajr, degrees.
    pub fn fajr_angle(self) -> f64 {
        match self {
            Method::Karachi | Method::Mwl => -18.0,
            Method::Isna => -15.0,
            Method::Makkah => -19.0,
            Method::Egypt => -19.5,
        }
    }

    pub fn isha(self) -> IshaRule {
        match self {
            Method::Karachi => IshaRule::Angle(-18.0),
            Method::Isna => IshaRule::Angle(-15.0),
            Method::Mwl => IshaRule::Angle(-17.0),
            Method::Makkah => IshaRule::AfterSunset { minutes: 90 },
            Method::Egypt => IshaRule::Angle(-17.5),
        }
    }

    /// Resolve a selector; `None` for unknown names and ids outside `0..=4`.
    pub fn select(selector: &Selector) -> Option<Self> {
        match selector {
            Selector::Id(id) => Self::ALL.into_iter().find(|method| method.id() == *id),
            Selector::Name(name) => Self::ALL
                .into_iter()
                .find(|method| method.name().eq_ignore_ascii_case(name)),
        }
    }
}

/// Shadow-length convention for asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AsrMethod {
    /// Shadow equals object length plus noon shadow.
    Shafii,
    /// Shadow equals twice the object length plus noon shadow.
    Hanafi,
}

impl AsrMethod {
    pub const ALL: [AsrMethod; 2] = [AsrMethod::Shafii, AsrMethod::Hanafi];

    pub const DEFAULT: AsrMethod = AsrMethod::Shafii;

    pub fn id(self) -> i64 {
        match self {
            AsrMethod::Shafii => 0,
            AsrMethod::Hanafi => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AsrMethod::Shafii => "Shafii",
            AsrMethod::Hanafi => "Hanafi",
        }
    }

    /// Extra shadow lengths beyond the first: 0 or 1.
    pub fn shadow_factor(self) -> u8 {
        match self {
            AsrMethod::Shafii => 0,
            AsrMethod::Hanafi => 1,
        }
    }

    /// Resolve a selector; `None` for unknown names and ids outside `0..=1`.
    pub fn select(selector: &Selector) -> Option<Self> {
        match selector {
            Selector::Id(id) => Self::ALL.into_iter().find(|method| method.id() == *id),
            Selector::Name(name) => Self::ALL
                .into_iter()
                .find(|method| method.name().eq_ignore_ascii_case(name)),
        }
    }
}
