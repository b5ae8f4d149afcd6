//! Status enumeration for vacation plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of vacation plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is drafted but nothing is booked yet
    #[default]
    Planned,

    /// Reservations for the plan are confirmed
    Confirmed,

    /// Trip was called off
    Cancelled,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(PlanStatus::Planned),
            "confirmed" => Ok(PlanStatus::Confirmed),
            "cancelled" | "canceled" => Ok(PlanStatus::Cancelled),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Planned => "planned",
            PlanStatus::Confirmed => "confirmed",
            PlanStatus::Cancelled => "cancelled",
        }
    }

    /// Get status with a leading icon for list display.
    ///
    /// ```rust
    /// use itinera_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Confirmed.with_icon(), "✓ Confirmed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Planned => "○ Planned",
            PlanStatus::Confirmed => "✓ Confirmed",
            PlanStatus::Cancelled => "✗ Cancelled",
        }
    }
}
