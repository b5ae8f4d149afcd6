//! Vacation plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DateRange, PlanStatus};

/// A user's trip to one destination over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VacationPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Destination the trip goes to (resolved by the destination catalogue)
    pub destination_id: u64,

    /// Trip dates, both ends inclusive
    pub range: DateRange,

    /// Booking status of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}
