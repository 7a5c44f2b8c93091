// Wire format for timestamps shared by every payload this service returns.
//
// Serialization always writes second precision UTC with a literal `Z`
// (`2025-02-08T14:30:00Z`). Deserialization accepts any RFC 3339 value and
// normalises it to UTC.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub type Timestamp = DateTime<Utc>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp {year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")]
pub struct InvalidTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
}

/// Builds a UTC timestamp from calendar fields.
pub fn utc_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> Result<Timestamp, InvalidTimestamp> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .ok_or(InvalidTimestamp {
            year,
            month,
            day,
            hour,
            min,
            sec,
        })
}

pub fn format_timestamp(value: &Timestamp) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|parsed| parsed.with_timezone(&Utc))
}

pub mod iso8601 {
    use super::*;

    pub fn serialize<S>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Same format as [`iso8601`], with `null` standing for an absent value.
pub mod iso8601_option {
    use super::*;

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_some(&format_timestamp(timestamp)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
