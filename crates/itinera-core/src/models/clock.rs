//! Clock time and calendar date parsing.

use std::{fmt, str::FromStr};

use jiff::civil::{Date, Time};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ItineraryError, Result};

/// A time of day with minute precision, written as `HH:MM` (24-hour).
///
/// Ordering is chronological within a day. Seconds and sub-seconds are
/// always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(Time);

impl ClockTime {
    /// Creates a clock time from an hour (0-23) and minute (0-59).
    pub fn new(hour: i8, minute: i8) -> Result<Self> {
        Time::new(hour, minute, 0, 0)
            .map(Self)
            .map_err(|e| ItineraryError::invalid_input("time").with_reason(e.to_string()))
    }

    /// Hour of the day, 0-23.
    pub fn hour(&self) -> i8 {
        self.0.hour()
    }

    /// Minute of the hour, 0-59.
    pub fn minute(&self) -> i8 {
        self.0.minute()
    }

    /// The underlying civil time.
    pub fn as_time(&self) -> Time {
        self.0
    }
}

impl From<ClockTime> for Time {
    fn from(value: ClockTime) -> Self {
        value.0
    }
}

impl FromStr for ClockTime {
    type Err = ItineraryError;

    fn from_str(s: &str) -> Result<Self> {
        let time = Time::strptime("%H:%M", s.trim()).map_err(|e| {
            ItineraryError::invalid_input("time")
                .with_reason(format!("expected HH:MM (24-hour), got '{s}': {e}"))
        })?;
        Ok(Self(time))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Only that exact form is accepted: a four-digit unsigned year and
/// zero-padded month and day. Strings carrying a time of day, an offset, a
/// sign or short fields are rejected.
pub fn parse_calendar_date(s: &str) -> Result<Date> {
    let input = s.trim();
    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(ItineraryError::invalid_input("date")
            .with_reason(format!("expected YYYY-MM-DD, got '{s}'")));
    }

    Date::strptime("%Y-%m-%d", input).map_err(|e| {
        ItineraryError::invalid_input("date")
            .with_reason(format!("expected YYYY-MM-DD, got '{s}': {e}"))
    })
}
