//! Timestamps as sent by the ticket job backend
//!
//! The backend sends either instants with an offset or bare local date-times
//! without one. Bare values are wall-clock times already and are never
//! shifted into another zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Offsets written without a colon, e.g. `+0100`
const ZONED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Accepted bare date-time forms, tried in order
const LOCAL_FALLBACKS: &[&str] = &[LOCAL_FORMAT, "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A point in time attached to a job or step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timestamp {
    /// Instant with a known offset
    Zoned(DateTime<Utc>),
    /// Wall-clock time with no offset information
    Local(NaiveDateTime),
}

/// The string is not a timestamp in any accepted form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp: {0:?}")]
pub struct TimestampError(String);

impl Timestamp {
    /// Parses an instant with an offset, a bare date-time or a bare date
    /// (UTC midnight)
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        let input = input.trim();

        if let Ok(zoned) = DateTime::parse_from_rfc3339(input)
            .or_else(|_| DateTime::parse_from_str(input, ZONED_FORMAT))
        {
            return Ok(Timestamp::Zoned(zoned.with_timezone(&Utc)));
        }

        if let Some(local) = LOCAL_FALLBACKS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        {
            return Ok(Timestamp::Local(local));
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| Timestamp::Zoned(midnight.and_utc()))
            .ok_or_else(|| TimestampError(input.to_string()))
    }

    /// Wall-clock reading of this timestamp in the given zone
    pub fn wall_clock<Tz: TimeZone>(&self, zone: &Tz) -> NaiveDateTime {
        match self {
            Timestamp::Zoned(instant) => instant.with_timezone(zone).naive_local(),
            Timestamp::Local(wall) => *wall,
        }
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Timestamp::parse(&raw)
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        match timestamp {
            Timestamp::Zoned(instant) => instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Timestamp::Local(wall) => wall.format(LOCAL_FORMAT).to_string(),
        }
    }
}
