//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Activity, VacationPlan};

/// Wrapper type for displaying the result of create operations.
///
/// Prints a one-line confirmation with the new ID followed by the resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<VacationPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Activity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added activity with ID: {} on {}",
            self.resource.id, self.resource.date
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of what changed.
///
/// ```rust
/// use itinera_core::{
///     display::UpdateResult,
///     models::{DateRange, PlanStatus, VacationPlan},
/// };
/// use jiff::{civil::date, Timestamp};
///
/// let plan = VacationPlan {
///     id: 4,
///     destination_id: 2,
///     range: DateRange::single_day(date(2024, 6, 10)),
///     status: PlanStatus::Confirmed,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let result = UpdateResult::with_changes(plan, vec!["Status set to confirmed".to_string()]);
/// assert!(result.to_string().contains("- Status set to confirmed"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<VacationPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<VacationPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan {} ({}) and its activities",
            self.resource.id, self.resource.range
        )
    }
}

impl fmt::Display for DeleteResult<Activity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted activity {} from plan {}",
            self.resource.id, self.resource.plan_id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::{DateRange, PlanStatus};

    fn plan() -> VacationPlan {
        VacationPlan {
            id: 12,
            destination_id: 3,
            range: DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap(),
            status: PlanStatus::Planned,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn activity() -> Activity {
        Activity {
            id: 8,
            plan_id: 12,
            place_id: 30,
            date: date(2024, 6, 11),
            start_time: Some("10:15".parse().unwrap()),
            end_time: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_create_results() {
        let output = CreateResult::new(plan()).to_string();
        assert!(output.starts_with("Created plan with ID: 12\n"));
        assert!(output.contains("# 12. Trip to destination 3"));

        let output = CreateResult::new(activity()).to_string();
        assert!(output.starts_with("Added activity with ID: 8 on 2024-06-11\n"));
        assert!(output.contains("**10:15** Place 30"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(plan()).to_string();
        assert!(output.starts_with("Updated plan with ID: 12\n"));
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_results() {
        assert_eq!(
            DeleteResult::new(plan()).to_string(),
            "Deleted plan 12 (2024-06-10 to 2024-06-12) and its activities\n"
        );
        assert_eq!(
            DeleteResult::new(activity()).to_string(),
            "Deleted activity 8 from plan 12\n"
        );
    }
}
