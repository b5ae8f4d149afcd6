//! Data models for vacation plans, activities and trip days.
//!
//! All calendar values are zone-free civil dates ([`jiff::civil::Date`]) and
//! minute-precision clock times ([`ClockTime`]). The wire formats used by the
//! storage collaborators are `YYYY-MM-DD` for dates and `HH:MM` (24-hour) for
//! times; both round-trip through serde and `FromStr`.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the data structures stay free of
//! presentation concerns.
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::models::{Activity, ClockTime, DateRange};
//! use jiff::civil::date;
//!
//! let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap();
//! assert_eq!(range.total_days().unwrap(), 3);
//!
//! let lunch = Activity {
//!     id: 1,
//!     plan_id: 7,
//!     place_id: 42,
//!     date: date(2024, 6, 11),
//!     start_time: Some("12:30".parse::<ClockTime>().unwrap()),
//!     end_time: None,
//!     notes: "Table for two".to_string(),
//! };
//! assert!(range.contains(lunch.date));
//! ```

pub mod activity;
pub mod clock;
pub mod date_range;
pub mod filters;
pub mod plan;
pub mod status;
pub mod trip_day;

#[cfg(test)]
mod tests;

pub use activity::Activity;
pub use clock::{parse_calendar_date, ClockTime};
pub use date_range::{days_between, DateRange};
pub use filters::PlanFilter;
pub use plan::VacationPlan;
pub use status::PlanStatus;
pub use trip_day::TripDay;
