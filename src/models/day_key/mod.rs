//! Canonical day identifiers.
//!
//! A [`DayKey`] names a calendar day with no time component. Two instants on
//! the same local day always produce the same key. Keys are written as
//! `YYYY-MM-DD`. Parsing also accepts the `Date.toDateString()` shape
//! (`Mon Mar 04 2024`) so that data exported from the browser widget loads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";
const LEGACY_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a canonical or legacy key. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, CANONICAL_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(value, LEGACY_FORMAT))
            .ok()
            .map(Self)
    }

    /// The canonical string form.
    pub fn as_key_string(&self) -> String {
        self.0.format(CANONICAL_FORMAT).to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<&NaiveDate> for DayKey {
    fn from(date: &NaiveDate) -> Self {
        Self(*date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DayKey {
    fn from(instant: DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }
}

impl From<DayKey> for NaiveDate {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

/// Error returned when a string is not a recognizable day key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day key: {0:?}")]
pub struct ParseDayKeyError(String);

impl FromStr for DayKey {
    type Err = ParseDayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseDayKeyError(s.to_string()))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_key_string())
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
