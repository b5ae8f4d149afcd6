//! Itinerary assembly for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::{ItineraryError, Result},
    itinerary::{Itinerary, ItineraryBuilder},
    params::ShowItinerary,
};

impl Planner {
    /// Builds the day-by-day itinerary of a plan.
    ///
    /// The plan and its activities are read in one connection so the
    /// timeline reflects a single snapshot. `params.today` overrides the
    /// reference date; otherwise today in the planner's time zone is used.
    ///
    /// # Errors
    ///
    /// - `ItineraryError::PlanNotFound` if the plan doesn't exist
    /// - `ItineraryError::InvalidRange` if the stored dates are reversed
    pub async fn show_itinerary(&self, params: &ShowItinerary) -> Result<Itinerary> {
        let plan_id = params.plan_id;
        let today = params.today.unwrap_or_else(|| self.today());

        let (plan, activities) = self
            .with_database(move |db| {
                let plan = db
                    .get_plan(plan_id)?
                    .ok_or(ItineraryError::PlanNotFound { id: plan_id })?;
                let activities = db.get_activities(plan_id)?;
                Ok((plan, activities))
            })
            .await?;

        debug!(
            "Assembling itinerary for plan {plan_id} with {} activities as of {today}",
            activities.len()
        );

        ItineraryBuilder::new(plan.range)
            .with_plan_id(plan.id)
            .with_activities(activities)
            .with_today(today)
            .build()
    }
}
