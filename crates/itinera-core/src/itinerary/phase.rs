//! Where "today" falls relative to a trip.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::{days_between, DateRange};

/// Position of a reference date relative to a trip's dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum TripPhase {
    /// The trip starts after the reference date
    Upcoming,
    /// The reference date is trip day `day_index`
    InProgress { day_index: u32 },
    /// The trip ended before the reference date
    Finished,
}

impl TripPhase {
    /// Whether the trip is underway.
    pub fn is_active(&self) -> bool {
        matches!(self, TripPhase::InProgress { .. })
    }
}

/// 1-based trip day for `today`, or `None` outside `[range.start, range.end]`.
pub fn current_day_index(range: &DateRange, today: Date) -> Option<u32> {
    if !range.contains(today) {
        return None;
    }
    let elapsed = days_between(range.start, today).ok()?;
    u32::try_from(elapsed).ok().map(|days| days + 1)
}

/// Classifies `today` as before, during or after the trip.
pub fn trip_phase(range: &DateRange, today: Date) -> TripPhase {
    if today < range.start {
        TripPhase::Upcoming
    } else if today > range.end {
        TripPhase::Finished
    } else {
        match current_day_index(range, today) {
            Some(day_index) => TripPhase::InProgress { day_index },
            None => TripPhase::Finished,
        }
    }
}

/// Today's calendar date in the given reference time zone.
pub fn today_in(time_zone: &TimeZone) -> Date {
    Timestamp::now().to_zoned(time_zone.clone()).date()
}
