//! Activity operations for the Planner.

use super::Planner;
use crate::{
    error::{ItineraryError, Result},
    models::Activity,
    params::{AddActivity, Id},
};

impl Planner {
    /// Schedules an activity on a plan.
    ///
    /// # Errors
    ///
    /// - `ItineraryError::PlanNotFound` if the plan doesn't exist
    /// - `ItineraryError::InvalidInput` if the date is outside the plan's
    ///   dates, or the end time precedes the start time
    pub async fn add_activity(&self, params: &AddActivity) -> Result<Activity> {
        let new = params.clone();
        self.with_database(move |db| db.add_activity(&new)).await
    }

    /// Retrieves an activity by its ID.
    pub async fn get_activity(&self, params: &Id) -> Result<Option<Activity>> {
        let activity_id = params.id;
        self.with_database(move |db| db.get_activity(activity_id))
            .await
    }

    /// Lists a plan's activities in creation order.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::PlanNotFound` if the plan doesn't exist.
    pub async fn get_activities(&self, params: &Id) -> Result<Vec<Activity>> {
        let plan_id = params.id;
        self.with_database(move |db| {
            if db.get_plan(plan_id)?.is_none() {
                return Err(ItineraryError::PlanNotFound { id: plan_id });
            }
            db.get_activities(plan_id)
        })
        .await
    }

    /// Deletes an activity. To change an activity, delete it and add a new
    /// one.
    pub async fn delete_activity(&self, params: &Id) -> Result<Activity> {
        let activity_id = params.id;
        self.with_database(move |db| db.delete_activity(activity_id))
            .await?
            .ok_or(ItineraryError::ActivityNotFound { id: activity_id })
    }
}
