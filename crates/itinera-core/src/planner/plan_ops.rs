//! Vacation plan operations for the Planner.

use jiff::civil::Date;
use log::info;

use super::Planner;
use crate::{
    error::{ItineraryError, Result},
    models::{DateRange, PlanFilter, PlanStatus, VacationPlan},
    params::{CreatePlan, DeletePlan, Id, ListPlans, ReschedulePlan},
    selector::DateRangeSelector,
};

/// Runs both dates through the selector so plan dates obey the same rules as
/// an interactive date pick.
fn select_dates(start: Date, end: Date, minimum_date: Option<Date>) -> Result<DateRange> {
    let mut selector = DateRangeSelector::new();
    selector.set_minimum_date(minimum_date);
    selector.select_range(start, end)
}

impl Planner {
    /// Creates a new plan in the `planned` state.
    ///
    /// # Errors
    ///
    /// - `ItineraryError::InvalidRange` if `end` precedes `start`
    /// - `ItineraryError::DateOutOfRange` if either date precedes
    ///   `minimum_date`
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<VacationPlan> {
        let range = select_dates(params.start, params.end, params.minimum_date)?;
        let destination_id = params.destination_id;

        let plan = self
            .with_database(move |db| db.create_plan(destination_id, &range))
            .await?;
        info!(
            "Created plan {} for destination {} ({} to {})",
            plan.id, plan.destination_id, plan.range.start, plan.range.end
        );
        Ok(plan)
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<VacationPlan>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_plan(plan_id)).await
    }

    /// Lists plans ordered by start date.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<VacationPlan>> {
        let filter = PlanFilter::from(params);
        self.with_database(move |db| db.list_plans(Some(&filter)))
            .await
    }

    /// Lists plans that are not cancelled and have not ended yet, relative to
    /// the planner's "today".
    pub async fn list_upcoming_plans(&self) -> Result<Vec<VacationPlan>> {
        let filter = PlanFilter {
            ending_on_or_after: Some(self.today()),
            ..Default::default()
        };
        let plans = self
            .with_database(move |db| db.list_plans(Some(&filter)))
            .await?;
        Ok(plans
            .into_iter()
            .filter(|plan| plan.status != PlanStatus::Cancelled)
            .collect())
    }

    /// Marks a plan as confirmed.
    pub async fn confirm_plan(&self, params: &Id) -> Result<VacationPlan> {
        self.set_plan_status(params.id, PlanStatus::Confirmed).await
    }

    /// Marks a plan as cancelled. The plan and its activities are kept.
    pub async fn cancel_plan(&self, params: &Id) -> Result<VacationPlan> {
        self.set_plan_status(params.id, PlanStatus::Cancelled).await
    }

    async fn set_plan_status(&self, plan_id: u64, status: PlanStatus) -> Result<VacationPlan> {
        self.with_database(move |db| db.set_plan_status(plan_id, status))
            .await?
            .ok_or(ItineraryError::PlanNotFound { id: plan_id })
    }

    /// Moves a plan to new dates, validated like [`Planner::create_plan`].
    ///
    /// Activities keep their own dates; those left outside the new range
    /// show up in the itinerary's `outside_range` list.
    pub async fn reschedule_plan(&self, params: &ReschedulePlan) -> Result<VacationPlan> {
        let range = select_dates(params.start, params.end, params.minimum_date)?;
        let plan_id = params.id;

        let plan = self
            .with_database(move |db| db.reschedule_plan(plan_id, &range))
            .await?
            .ok_or(ItineraryError::PlanNotFound { id: plan_id })?;
        info!(
            "Rescheduled plan {plan_id} to {} to {}",
            plan.range.start, plan.range.end
        );
        Ok(plan)
    }

    /// Permanently deletes a plan and all its activities.
    ///
    /// # Errors
    ///
    /// - `ItineraryError::InvalidInput` if `confirmed` is false
    /// - `ItineraryError::PlanNotFound` if the plan doesn't exist
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<VacationPlan> {
        if !params.confirmed {
            return Err(ItineraryError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let plan_id = params.id;
        self.with_database(move |db| db.delete_plan(plan_id))
            .await?
            .ok_or(ItineraryError::PlanNotFound { id: plan_id })
    }
}
