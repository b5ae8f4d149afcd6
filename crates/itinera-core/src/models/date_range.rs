//! Inclusive calendar date ranges.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// An inclusive range of calendar days.
///
/// [`DateRange::new`] enforces `start <= end`. The fields stay public so that
/// ranges read back from storage or deserialized from the wire can be held
/// as-is; consumers that depend on the ordering call [`DateRange::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub start: Date,

    /// Last day of the range (inclusive)
    pub end: Date,
}

impl DateRange {
    /// Creates a range, failing with [`ItineraryError::InvalidRange`] when
    /// `end` precedes `start`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// A range covering exactly one day.
    pub fn single_day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Checks the `start <= end` invariant.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(ItineraryError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether `date` falls within the range, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn total_days(&self) -> Result<u32> {
        self.validate()?;
        let elapsed = days_between(self.start, self.end)?;
        Ok(elapsed.unsigned_abs() + 1)
    }
}

/// Whole calendar days from `from` to `to`; negative when `to` is earlier.
///
/// Computed on civil dates, so there is no daylight-saving boundary that
/// could shift the result.
pub fn days_between(from: Date, to: Date) -> Result<i32> {
    Ok(from.until(to)?.get_days())
}
