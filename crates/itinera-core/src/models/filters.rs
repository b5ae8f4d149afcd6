//! Filter types for querying vacation plans.

use jiff::civil::Date;

use super::PlanStatus;
use crate::params::ListPlans;

/// Filter options for querying vacation plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Only plans with this status; all statuses when `None`
    pub status: Option<PlanStatus>,

    /// Only plans for this destination
    pub destination_id: Option<u64>,

    /// Only plans whose range is still running or upcoming on this date
    pub ending_on_or_after: Option<Date>,
}

impl From<&ListPlans> for PlanFilter {
    fn from(params: &ListPlans) -> Self {
        Self {
            status: params.status,
            destination_id: params.destination_id,
            ending_on_or_after: None,
        }
    }
}
