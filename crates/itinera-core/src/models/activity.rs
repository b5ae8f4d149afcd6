//! Activity model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// A scheduled visit to a place on one day of a vacation plan.
///
/// Activities are never edited in place; changing one means deleting it and
/// creating a replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: u64,

    /// ID of the owning vacation plan
    pub plan_id: u64,

    /// Place being visited (hotel, restaurant, excursion, ...)
    pub place_id: u64,

    /// Calendar day of the visit
    pub date: Date,

    /// Start time; `None` means the activity spans the whole day
    #[serde(default)]
    pub start_time: Option<ClockTime>,

    /// End time, if known
    #[serde(default)]
    pub end_time: Option<ClockTime>,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl Activity {
    /// An activity without a start time is shown as an all-day entry.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }
}
