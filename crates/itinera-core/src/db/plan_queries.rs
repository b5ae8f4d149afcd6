//! Vacation plan CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row, ToSql};

use super::{date_param, id_column, id_param, parse_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{DateRange, PlanFilter, PlanStatus, VacationPlan},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO vacation_plans (destination_id, start_date, end_date, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const PLAN_COLUMNS: &str = "id, destination_id, start_date, end_date, status, created_at, updated_at";
const UPDATE_PLAN_STATUS_SQL: &str =
    "UPDATE vacation_plans SET status = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_PLAN_DATES_SQL: &str =
    "UPDATE vacation_plans SET start_date = ?1, end_date = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_PLAN_ACTIVITIES_SQL: &str = "DELETE FROM vacation_activities WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM vacation_plans WHERE id = ?1";

fn select_plan_sql() -> String {
    format!("SELECT {PLAN_COLUMNS} FROM vacation_plans WHERE id = ?1")
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<VacationPlan> {
    Ok(VacationPlan {
        id: id_column(row, 0)?,
        destination_id: id_column(row, 1)?,
        range: DateRange {
            start: parse_column(row, 2)?,
            end: parse_column(row, 3)?,
        },
        status: parse_column::<PlanStatus>(row, 4)?,
        created_at: parse_column::<Timestamp>(row, 5)?,
        updated_at: parse_column::<Timestamp>(row, 6)?,
    })
}

impl super::Database {
    /// Creates a new plan in the `planned` state.
    pub fn create_plan(&mut self, destination_id: u64, range: &DateRange) -> Result<VacationPlan> {
        range.validate()?;
        let destination = id_param(destination_id)?;
        let (start, end) = (date_param(range.start)?, date_param(range.end)?);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                destination,
                start,
                end,
                PlanStatus::Planned.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created plan {id} for destination {destination_id}");

        Ok(VacationPlan {
            id,
            destination_id,
            range: *range,
            status: PlanStatus::Planned,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<VacationPlan>> {
        let id = id_param(id)?;
        self.connection
            .query_row(&select_plan_sql(), params![id], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists plans ordered by trip start, with optional filtering.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<VacationPlan>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM vacation_plans");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }

            if let Some(destination_id) = f.destination_id {
                conditions.push("destination_id = ?");
                params_vec.push(Box::new(id_param(destination_id)?));
            }

            if let Some(date) = f.ending_on_or_after {
                conditions.push("end_date >= ?");
                params_vec.push(Box::new(date_param(date)?));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY start_date ASC, id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let plans = stmt
            .query_map(&params_refs[..], plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        Ok(plans)
    }

    /// Changes a plan's status.
    /// Returns the updated plan, or None if the plan doesn't exist.
    pub fn set_plan_status(&mut self, id: u64, status: PlanStatus) -> Result<Option<VacationPlan>> {
        let row_id = id_param(id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_PLAN_STATUS_SQL,
                params![status.as_str(), &now, row_id],
            )
            .db_context("Failed to update plan status")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        let plan = tx
            .query_row(&select_plan_sql(), params![row_id], plan_from_row)
            .db_context("Failed to reload plan")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Plan {id} is now {}", status.as_str());

        Ok(Some(plan))
    }

    /// Moves a plan to new dates. Activities keep their dates; any that no
    /// longer fall within the trip stay stored but drop off the itinerary.
    /// Returns the updated plan, or None if the plan doesn't exist.
    pub fn reschedule_plan(&mut self, id: u64, range: &DateRange) -> Result<Option<VacationPlan>> {
        range.validate()?;
        let row_id = id_param(id)?;
        let (start, end) = (date_param(range.start)?, date_param(range.end)?);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_PLAN_DATES_SQL,
                params![start, end, &now, row_id],
            )
            .db_context("Failed to update plan dates")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        let plan = tx
            .query_row(&select_plan_sql(), params![row_id], plan_from_row)
            .db_context("Failed to reload plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(plan))
    }

    /// Permanently deletes a plan and all its activities.
    /// Returns the deleted plan, or None if the plan doesn't exist.
    pub fn delete_plan(&mut self, id: u64) -> Result<Option<VacationPlan>> {
        let row_id = id_param(id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = tx
            .query_row(&select_plan_sql(), params![row_id], plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        let Some(plan) = plan else {
            return Ok(None);
        };

        tx.execute(DELETE_PLAN_ACTIVITIES_SQL, params![row_id])
            .db_context("Failed to delete plan activities")?;
        tx.execute(DELETE_PLAN_SQL, params![row_id])
            .db_context("Failed to delete plan")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted plan {id}");

        Ok(Some(plan))
    }
}
