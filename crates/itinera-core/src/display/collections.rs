//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Activity, VacationPlan};

/// Newtype wrapper for displaying a list of plans.
///
/// Each plan is a compact `##` section; an empty list prints
/// `No plans found.`.
///
/// ```rust
/// use itinera_core::display::Plans;
///
/// assert_eq!(Plans(Vec::new()).to_string(), "No plans found.\n");
/// ```
pub struct Plans(pub Vec<VacationPlan>);

impl Plans {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, VacationPlan> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Plans {
    type Item = &'a VacationPlan;
    type IntoIter = std::slice::Iter<'a, VacationPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            writeln!(
                f,
                "## Destination {} (ID: {})",
                plan.destination_id, plan.id
            )?;
            writeln!(f)?;
            writeln!(f, "- **Dates**: {}", plan.range)?;
            writeln!(f, "- **Status**: {}", plan.status.with_icon())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a plan's activities, one bullet each.
pub struct Activities(pub Vec<Activity>);

impl Activities {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of activities in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activities found.");
        }
        for activity in &self.0 {
            write!(f, "- {}: ", activity.date)?;
            write!(f, "{}", activity.to_string().trim_start_matches("- "))?;
        }
        Ok(())
    }
}
