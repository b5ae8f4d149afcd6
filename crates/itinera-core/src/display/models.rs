//! Display implementations for domain models.
//!
//! Output is markdown: plans and itineraries get a `#` header and a
//! metadata list, trip days a `##` header, activities one bullet each.

use std::fmt;

use super::datetime::{CalendarDay, UtcDateTime};
use crate::{
    itinerary::{Itinerary, TripPhase},
    models::{Activity, DateRange, PlanStatus, TripDay, VacationPlan},
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Writes `(N days)` after a range, or nothing if the range is reversed.
fn fmt_length(f: &mut fmt::Formatter<'_>, range: &DateRange) -> fmt::Result {
    match range.total_days() {
        Ok(1) => write!(f, " (1 day)"),
        Ok(days) => write!(f, " ({days} days)"),
        Err(_) => Ok(()),
    }
}

impl fmt::Display for VacationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. Trip to destination {}", self.id, self.destination_id)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        write!(f, "- Dates: {}", self.range)?;
        fmt_length(f, &self.range)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", UtcDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", UtcDateTime(&self.updated_at))?;
        Ok(())
    }
}

impl Activity {
    /// `All day`, `14:00` or `14:00-16:30`.
    fn time_label(&self) -> String {
        match (self.start_time, self.end_time) {
            (None, _) => "All day".to_string(),
            (Some(start), None) => start.to_string(),
            (Some(start), Some(end)) => format!("{start}-{end}"),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** Place {} (activity {})",
            self.time_label(),
            self.place_id,
            self.id
        )?;
        if !self.notes.is_empty() {
            write!(f, ": {}", self.notes)?;
        }
        writeln!(f)
    }
}

impl TripDay {
    fn fmt_day(&self, f: &mut fmt::Formatter<'_>, is_today: bool) -> fmt::Result {
        write!(f, "## Day {} - {}", self.day_index, CalendarDay(&self.date))?;
        if is_today {
            write!(f, " (today)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if self.activities.is_empty() {
            writeln!(f, "No activities planned.")?;
        } else {
            for activity in &self.activities {
                write!(f, "{activity}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for TripDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_day(f, false)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plan_id {
            Some(id) => writeln!(f, "# Itinerary for plan {id}")?,
            None => writeln!(f, "# Itinerary")?,
        }
        writeln!(f)?;

        write!(f, "- Dates: {}", self.range)?;
        fmt_length(f, &self.range)?;
        writeln!(f)?;
        match self.phase() {
            Some(TripPhase::Upcoming) => writeln!(f, "- Trip has not started yet")?,
            Some(TripPhase::InProgress { day_index }) => {
                writeln!(f, "- Today is day {day_index} of {}", self.days.len())?;
            }
            Some(TripPhase::Finished) => writeln!(f, "- Trip is over")?,
            None => {}
        }
        writeln!(f, "- Activities: {}", self.scheduled_count())?;
        writeln!(f)?;

        for day in &self.days {
            day.fmt_day(f, self.current_day == Some(day.day_index))?;
        }

        if !self.outside_range.is_empty() {
            writeln!(f, "## Outside trip dates")?;
            writeln!(f)?;
            for activity in &self.outside_range {
                write!(f, "- {}: ", activity.date)?;
                // Drop the bullet from the activity's own line.
                let line = activity.to_string();
                write!(f, "{}", line.trim_start_matches("- "))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
