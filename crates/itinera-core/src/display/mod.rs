//! Display formatting for plans, activities and itineraries.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here add context such as "this was just created" or
//! "this list is empty".
//!
//! ```text
//! ┌──────────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Domain Models     │    │ Wrappers        │    │   Formatted     │
//! │ (VacationPlan, ...)  │───▶│ & Result Types  │───▶│    Output       │
//! │                      │    │                 │    │   (Terminal)    │
//! └──────────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown, rendered by the CLI's terminal renderer.
//!
//! - [`collections`]: [`Plans`] and [`Activities`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: timestamp and calendar-day formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::{
//!     display::CreateResult,
//!     models::{DateRange, PlanStatus, VacationPlan},
//! };
//! use jiff::{civil::date, Timestamp};
//!
//! let plan = VacationPlan {
//!     id: 1,
//!     destination_id: 7,
//!     range: DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap(),
//!     status: PlanStatus::Planned,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(plan).to_string();
//! assert!(output.contains("Created plan with ID: 1"));
//! assert!(output.contains("2024-06-10 to 2024-06-12"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Activities, Plans};
pub use datetime::{CalendarDay, UtcDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
