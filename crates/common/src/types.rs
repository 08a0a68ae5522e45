use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, always with six fractional digits.
const ISO_8601_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const ISO_8601_PARSE: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A UTC instant with microsecond precision.
///
/// Serializes as a naive ISO-8601 string without an offset suffix, e.g.
/// `2024-01-01T00:00:00.000000`. The value is always interpreted as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Reads the system clock.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wraps an existing instant, truncating it to microseconds.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(6))
    }

    /// Parses the wire format. A missing fractional part is accepted.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let naive = NaiveDateTime::parse_from_str(s, ISO_8601_PARSE)?;
        Ok(Self::from_datetime(naive.and_utc()))
    }

    /// Returns the underlying instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(ISO_8601_MICROS))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
