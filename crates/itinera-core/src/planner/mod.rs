//! High-level planner API for vacation plans, activities and itineraries.
//!
//! The [`Planner`] sits between the interfaces (the CLI) and the local store,
//! and is where the itinerary engine gets its inputs:
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │       Planner        │    │    Database     │
//! │     (CLI)       │───▶│ plan_ops             │───▶│   (via db/)     │
//! │                 │    │ activity_ops         │    │                 │
//! │                 │    │ itinerary_ops ──┐    │    └─────────────────┘
//! └─────────────────┘    └─────────────────┼────┘
//!                                          ▼
//!                          DateRangeSelector / ItineraryBuilder
//! ```
//!
//! Every operation opens its own SQLite connection inside
//! [`tokio::task::spawn_blocking`]; the planner itself holds no connection
//! and can be shared freely.
//!
//! "Today" comes from the planner's reference time zone (UTC unless
//! configured), never from the process's local zone.
//!
//! # Usage
//!
//! ```rust,no_run
//! use itinera_core::{params::CreatePlan, PlannerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/itinera.db"))
//!     .with_time_zone_name("Europe/Paris")?
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         destination_id: 7,
//!         start: date(2030, 6, 10),
//!         end: date(2030, 6, 12),
//!         minimum_date: Some(planner.today()),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::{civil::Date, tz::TimeZone};
use tokio::task;

use crate::{
    db::Database,
    error::{ItineraryError, Result},
    itinerary::today_in,
};

pub mod activity_ops;
pub mod builder;
pub mod itinerary_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for managing vacation plans and itineraries.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) time_zone: TimeZone,
}

impl Planner {
    /// Creates a new planner with the specified database path and reference
    /// time zone.
    pub(crate) fn new(db_path: PathBuf, time_zone: TimeZone) -> Self {
        Self { db_path, time_zone }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Reference time zone used to decide what "today" is.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Today's date in the reference time zone.
    pub fn today(&self) -> Date {
        today_in(&self.time_zone)
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| ItineraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
