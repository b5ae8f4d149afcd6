//! Trip day model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Activity;

/// One calendar day of a trip with the activities scheduled on it.
///
/// Derived from a plan's range on every render; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TripDay {
    /// 1-based position within the trip (1 = first day)
    pub day_index: u32,

    /// Calendar date of the day
    pub date: Date,

    /// Activities on this day, all-day entries first, then by start time
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl TripDay {
    /// Creates a day with no activities.
    pub fn new(day_index: u32, date: Date) -> Self {
        Self {
            day_index,
            date,
            activities: Vec::new(),
        }
    }

    /// Whether nothing is scheduled on this day.
    pub fn is_free(&self) -> bool {
        self.activities.is_empty()
    }
}
