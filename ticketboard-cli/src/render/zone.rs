//! Display zone for timestamps

use std::str::FromStr;

use chrono::{FixedOffset, Local, NaiveDateTime, Offset, Utc};
use ticketboard_core::domain::Timestamp;

/// Zone in which timestamps are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The machine's local zone
    #[default]
    Local,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl DisplayZone {
    fn wall_clock(&self, timestamp: &Timestamp) -> NaiveDateTime {
        match self {
            DisplayZone::Local => timestamp.wall_clock(&Local),
            DisplayZone::Fixed(offset) => timestamp.wall_clock(offset),
        }
    }

    /// `YYYY-MM-DD`, or an empty string when there is no timestamp
    pub fn format_date(&self, timestamp: Option<&Timestamp>) -> String {
        timestamp
            .map(|ts| self.wall_clock(ts).format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// `HH:MM:SS`, or an empty string when there is no timestamp
    pub fn format_time(&self, timestamp: Option<&Timestamp>) -> String {
        timestamp
            .map(|ts| self.wall_clock(ts).format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    /// Accepts `local`, `utc`/`Z` or an offset such as `+01:00`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            s if s.eq_ignore_ascii_case("local") => Ok(DisplayZone::Local),
            s if s.eq_ignore_ascii_case("utc") || s == "Z" => Ok(DisplayZone::Fixed(Utc.fix())),
            s => s
                .parse::<FixedOffset>()
                .map(DisplayZone::Fixed)
                .map_err(|e| format!("invalid UTC offset {:?}: {}", s, e)),
        }
    }
}

impl std::fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}
