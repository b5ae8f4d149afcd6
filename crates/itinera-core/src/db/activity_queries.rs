//! Activity create/read/delete operations.
//!
//! Activities are never updated in place; an edit is a delete followed by a
//! new insert.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::{date_param, id_column, id_param, parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{Activity, DateRange},
    params::AddActivity,
};

const INSERT_ACTIVITY_SQL: &str = "INSERT INTO vacation_activities (plan_id, place_id, activity_date, start_time, end_time, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ACTIVITY_SQL: &str = "SELECT id, plan_id, place_id, activity_date, start_time, end_time, notes FROM vacation_activities WHERE id = ?1";
const SELECT_PLAN_ACTIVITIES_SQL: &str = "SELECT id, plan_id, place_id, activity_date, start_time, end_time, notes FROM vacation_activities WHERE plan_id = ?1 ORDER BY id ASC";
const DELETE_ACTIVITY_SQL: &str = "DELETE FROM vacation_activities WHERE id = ?1";

fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: id_column(row, 0)?,
        plan_id: id_column(row, 1)?,
        place_id: id_column(row, 2)?,
        date: parse_column(row, 3)?,
        start_time: parse_optional_column(row, 4)?,
        end_time: parse_optional_column(row, 5)?,
        notes: row.get(6)?,
    })
}

/// Checks the activity against its plan's dates and its own time window.
fn validate_activity(activity: &AddActivity, plan_range: &DateRange) -> Result<()> {
    if !plan_range.contains(activity.date) {
        return Err(ItineraryError::invalid_input("date").with_reason(format!(
            "{} is outside the plan dates {} to {}",
            activity.date, plan_range.start, plan_range.end
        )));
    }

    match (activity.start_time, activity.end_time) {
        (None, Some(_)) => Err(ItineraryError::invalid_input("end_time")
            .with_reason("an end time requires a start time")),
        (Some(start), Some(end)) if end < start => Err(ItineraryError::invalid_input("end_time")
            .with_reason(format!("end time {end} is before start time {start}"))),
        _ => Ok(()),
    }
}

impl super::Database {
    /// Schedules a new activity on an existing plan.
    ///
    /// # Errors
    ///
    /// - `ItineraryError::PlanNotFound` if the plan doesn't exist
    /// - `ItineraryError::InvalidInput` if the date falls outside the plan or
    ///   the end time precedes the start time
    pub fn add_activity(&mut self, new: &AddActivity) -> Result<Activity> {
        let plan = self
            .get_plan(new.plan_id)?
            .ok_or(ItineraryError::PlanNotFound { id: new.plan_id })?;
        validate_activity(new, &plan.range)?;
        let plan_id = id_param(new.plan_id)?;
        let place_id = id_param(new.place_id)?;
        let date = date_param(new.date)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_ACTIVITY_SQL,
            params![
                plan_id,
                place_id,
                date,
                new.start_time.map(|t| t.to_string()),
                new.end_time.map(|t| t.to_string()),
                &new.notes,
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to insert activity")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Added activity {id} to plan {} on {}", new.plan_id, new.date);

        Ok(Activity {
            id,
            plan_id: new.plan_id,
            place_id: new.place_id,
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            notes: new.notes.clone(),
        })
    }

    /// Retrieves an activity by its ID.
    pub fn get_activity(&self, id: u64) -> Result<Option<Activity>> {
        let id = id_param(id)?;
        self.connection
            .query_row(SELECT_ACTIVITY_SQL, params![id], activity_from_row)
            .optional()
            .db_context("Failed to query activity")
    }

    /// Lists a plan's activities in creation order.
    pub fn get_activities(&self, plan_id: u64) -> Result<Vec<Activity>> {
        let plan_id = id_param(plan_id)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_ACTIVITIES_SQL)
            .db_context("Failed to prepare query")?;

        let activities = stmt
            .query_map(params![plan_id], activity_from_row)
            .db_context("Failed to query activities")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch activities")?;

        Ok(activities)
    }

    /// Deletes an activity.
    /// Returns the deleted activity, or None if it doesn't exist.
    pub fn delete_activity(&mut self, id: u64) -> Result<Option<Activity>> {
        let row_id = id_param(id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let activity = tx
            .query_row(SELECT_ACTIVITY_SQL, params![row_id], activity_from_row)
            .optional()
            .db_context("Failed to query activity")?;

        if activity.is_some() {
            tx.execute(DELETE_ACTIVITY_SQL, params![row_id])
                .db_context("Failed to delete activity")?;
            tx.commit().db_context("Failed to commit transaction")?;
            debug!("Deleted activity {id}");
        }

        Ok(activity)
    }
}
