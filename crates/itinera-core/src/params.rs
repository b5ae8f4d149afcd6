//! Parameter structures for planner operations.
//!
//! These structures are shared by every interface that drives the
//! [`Planner`](crate::Planner). They carry no framework-specific derives
//! beyond serde; the CLI defines its own clap argument structs and converts
//! them with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, PlanStatus};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new vacation plan.
///
/// The dates go through a
/// [`DateRangeSelector`](crate::selector::DateRangeSelector), so `end` must
/// not precede `start` and neither may precede `minimum_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Destination the trip goes to
    pub destination_id: u64,
    /// First day of the trip
    pub start: Date,
    /// Last day of the trip (inclusive)
    pub end: Date,
    /// Earliest acceptable date, usually today; unconstrained when `None`
    #[serde(default)]
    pub minimum_date: Option<Date>,
}

/// Parameters for moving a plan to new dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReschedulePlan {
    /// ID of the plan to move
    pub id: u64,
    /// New first day of the trip
    pub start: Date,
    /// New last day of the trip (inclusive)
    pub end: Date,
    /// Earliest acceptable date, usually today; unconstrained when `None`
    #[serde(default)]
    pub minimum_date: Option<Date>,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only plans with this status
    #[serde(default)]
    pub status: Option<PlanStatus>,
    /// Only plans for this destination
    #[serde(default)]
    pub destination_id: Option<u64>,
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirmation flag; deletion is refused unless set
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for scheduling an activity on a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddActivity {
    /// ID of the plan to add the activity to
    pub plan_id: u64,
    /// Place being visited
    pub place_id: u64,
    /// Day of the visit; must fall within the plan's dates
    pub date: Date,
    /// Start time; all-day when `None`
    #[serde(default)]
    pub start_time: Option<ClockTime>,
    /// End time; must not precede `start_time`
    #[serde(default)]
    pub end_time: Option<ClockTime>,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

/// Parameters for showing a plan's itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowItinerary {
    /// ID of the plan
    pub plan_id: u64,
    /// Reference date; derived from the planner's time zone when `None`
    #[serde(default)]
    pub today: Option<Date>,
}
