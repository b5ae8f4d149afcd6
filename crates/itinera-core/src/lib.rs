//! Core library for the Itinera vacation planner.
//!
//! The heart of the crate is the itinerary engine: a
//! [`DateRangeSelector`] that turns user date picks into a validated
//! [`models::DateRange`], and an [`ItineraryBuilder`] that expands a range
//! into numbered [`models::TripDay`]s and files a plan's activities under
//! them. Around it sit a SQLite store ([`db`]), the async [`Planner`]
//! facade, and markdown [`display`] formatting.
//!
//! # Quick Start
//!
//! ```rust
//! use itinera_core::{
//!     models::{Activity, DateRange},
//!     DateRangeSelector, ItineraryBuilder, SelectionMode,
//! };
//! use jiff::civil::date;
//!
//! // Pick the trip dates the way a calendar widget would.
//! let mut selector = DateRangeSelector::new().with_minimum_date(date(2024, 6, 1));
//! assert_eq!(selector.select_date(date(2024, 6, 10)).unwrap(), SelectionMode::AwaitingEnd);
//! assert_eq!(selector.select_date(date(2024, 6, 12)).unwrap(), SelectionMode::Complete);
//! let range: DateRange = selector.range().unwrap();
//!
//! let dinner = Activity {
//!     id: 1,
//!     plan_id: 1,
//!     place_id: 42,
//!     date: date(2024, 6, 11),
//!     start_time: Some("19:30".parse().unwrap()),
//!     end_time: None,
//!     notes: String::new(),
//! };
//!
//! let itinerary = ItineraryBuilder::new(range)
//!     .with_activities(vec![dinner])
//!     .with_today(date(2024, 6, 11))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(itinerary.days.len(), 3);
//! assert_eq!(itinerary.days[1].activities.len(), 1);
//! assert_eq!(itinerary.current_day, Some(2));
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod planner;
pub mod selector;

// Re-export commonly used types
pub use db::Database;
pub use display::{Activities, CreateResult, DeleteResult, OperationStatus, Plans, UpdateResult};
pub use error::{ItineraryError, Result};
pub use itinerary::{Itinerary, ItineraryBuilder, TripPhase};
pub use models::{Activity, ClockTime, DateRange, PlanFilter, PlanStatus, TripDay, VacationPlan};
pub use params::{AddActivity, CreatePlan, DeletePlan, Id, ListPlans, ReschedulePlan, ShowItinerary};
pub use planner::{Planner, PlannerBuilder};
pub use selector::{DateRangeSelector, PartialRange, SelectionMode, SelectionState};
