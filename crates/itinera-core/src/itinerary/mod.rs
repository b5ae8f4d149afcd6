//! Day-by-day itinerary construction.
//!
//! The itinerary of a vacation plan is rebuilt from scratch on every render:
//!
//! ```text
//! ┌─────────────┐   build_days    ┌──────────────┐  assign_activities  ┌──────────────┐
//! │  DateRange  │────────────────▶│ TripDay x N  │────────────────────▶│  Itinerary   │
//! └─────────────┘                 │ (no entries) │   + Activity list   │ (grouped,    │
//!                                 └──────────────┘                     │  sorted)     │
//!                                                                      └──────────────┘
//! ```
//!
//! Everything here is a pure function of its inputs. "Today" is always passed
//! in by the caller (see [`today_in`]) rather than read from the wall clock.
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::{itinerary::ItineraryBuilder, models::DateRange};
//! use jiff::civil::date;
//!
//! let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap();
//! let itinerary = ItineraryBuilder::new(range)
//!     .with_today(date(2024, 6, 11))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(itinerary.days.len(), 3);
//! assert_eq!(itinerary.current_day, Some(2));
//! ```

use std::collections::HashMap;

use jiff::{civil::Date, ToSpan};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Activity, DateRange, TripDay},
};

mod phase;


pub use phase::{current_day_index, today_in, trip_phase, TripPhase};

/// A rendered trip timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Plan the itinerary was built for, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<u64>,

    /// Trip dates
    pub range: DateRange,

    /// One entry per trip day, in calendar order
    pub days: Vec<TripDay>,

    /// Activities dated outside the trip, in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outside_range: Vec<Activity>,

    /// Reference date used for `current_day`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<Date>,

    /// 1-based index of today's trip day, `None` before or after the trip
    #[serde(default)]
    pub current_day: Option<u32>,
}

impl Itinerary {
    /// Looks up a trip day by its 1-based index.
    pub fn day(&self, day_index: u32) -> Option<&TripDay> {
        let position = usize::try_from(day_index.checked_sub(1)?).ok()?;
        self.days.get(position)
    }

    /// Day to bring into view: today's day during the trip, otherwise the
    /// first day.
    pub fn focus_day(&self) -> u32 {
        self.current_day.unwrap_or(1)
    }

    /// Trip phase relative to the reference date, if one was supplied.
    pub fn phase(&self) -> Option<TripPhase> {
        self.today.map(|today| trip_phase(&self.range, today))
    }

    /// Total number of scheduled activities inside the trip dates.
    pub fn scheduled_count(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }
}

/// Builds itineraries from a date range and a snapshot of activities.
///
/// The associated functions ([`ItineraryBuilder::build_days`],
/// [`ItineraryBuilder::assign_activities`],
/// [`ItineraryBuilder::current_day_index`]) are the individual steps; the
/// builder value chains them and keeps the activities that fell outside the
/// trip instead of discarding them.
#[derive(Debug, Clone)]
pub struct ItineraryBuilder {
    range: DateRange,
    plan_id: Option<u64>,
    activities: Vec<Activity>,
    today: Option<Date>,
}

impl ItineraryBuilder {
    /// Starts an itinerary for the given trip dates.
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            plan_id: None,
            activities: Vec::new(),
            today: None,
        }
    }

    /// Tags the itinerary with the plan it belongs to.
    pub fn with_plan_id(mut self, plan_id: u64) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    /// Adds activities to place on the timeline. Input order is the
    /// tie-break for activities sharing a start time.
    pub fn with_activities<I>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = Activity>,
    {
        self.activities.extend(activities);
        self
    }

    /// Sets the reference date used to find the current trip day.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Builds the itinerary.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidRange` if the range ends before it
    /// starts.
    pub fn build(self) -> Result<Itinerary> {
        let days = Self::build_days(&self.range)?;
        let (days, outside_range) = group_by_day(days, self.activities);
        for activity in &outside_range {
            warn_outside(activity, &self.range);
        }
        let current_day = self
            .today
            .and_then(|today| Self::current_day_index(&self.range, today));

        Ok(Itinerary {
            plan_id: self.plan_id,
            range: self.range,
            days,
            outside_range,
            today: self.today,
            current_day,
        })
    }

    /// Produces one empty [`TripDay`] per calendar day of `range`, with
    /// `day_index` running from 1.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidRange` if `range.end < range.start`.
    /// Ranges are re-checked here even when they came through
    /// [`DateRange::new`].
    pub fn build_days(range: &DateRange) -> Result<Vec<TripDay>> {
        let total_days = range.total_days()?;
        debug!(
            "Building {total_days} trip days from {} to {}",
            range.start, range.end
        );

        Ok(range
            .start
            .series(1.day())
            .zip(1..=total_days)
            .map(|(date, day_index)| TripDay::new(day_index, date))
            .collect())
    }

    /// Places each activity on the day with the same date and orders each
    /// day's activities: all-day entries first, then by start time, keeping
    /// input order on ties.
    ///
    /// Activities whose date matches none of `days` are dropped and logged;
    /// they point at plan data that disagrees with the trip dates.
    pub fn assign_activities<I>(days: Vec<TripDay>, activities: I) -> Vec<TripDay>
    where
        I: IntoIterator<Item = Activity>,
    {
        let (days, dropped) = group_by_day(days, activities);
        if let (Some(first), Some(last)) = (days.first(), days.last()) {
            let range = DateRange {
                start: first.date,
                end: last.date,
            };
            for activity in &dropped {
                warn_outside(activity, &range);
            }
        } else if !dropped.is_empty() {
            warn!(
                "Dropping {} activities: itinerary has no days",
                dropped.len()
            );
        }
        days
    }

    /// 1-based index of `today` within `range`, or `None` when the trip has
    /// not started yet or is already over.
    pub fn current_day_index(range: &DateRange, today: Date) -> Option<u32> {
        current_day_index(range, today)
    }
}

fn group_by_day<I>(mut days: Vec<TripDay>, activities: I) -> (Vec<TripDay>, Vec<Activity>)
where
    I: IntoIterator<Item = Activity>,
{
    let positions: HashMap<Date, usize> = days
        .iter()
        .enumerate()
        .map(|(position, day)| (day.date, position))
        .collect();

    let mut outside = Vec::new();
    for activity in activities {
        match positions.get(&activity.date) {
            Some(&position) => days[position].activities.push(activity),
            None => outside.push(activity),
        }
    }

    // Stable: equal start times keep their input order.
    for day in &mut days {
        day.activities.sort_by_key(|activity| activity.start_time);
    }

    (days, outside)
}

fn warn_outside(activity: &Activity, range: &DateRange) {
    warn!(
        "Activity {} of plan {} is dated {}, outside the trip dates {} to {}; leaving it off the itinerary",
        activity.id, activity.plan_id, activity.date, range.start, range.end
    );
}
