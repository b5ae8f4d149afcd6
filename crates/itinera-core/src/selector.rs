//! Two-step date range selection.
//!
//! [`DateRangeSelector`] collects a start date and then an end date, the way a
//! calendar picker does when a user creates a vacation plan:
//!
//! ```text
//!                 select_date            select_date (>= start)
//! AwaitingStart ─────────────▶ AwaitingEnd ─────────────────────▶ Complete
//!       ▲                                                            │
//!       └──────────────────── begin() (from any state) ──────────────┘
//!
//! Complete ──select_date──▶ AwaitingEnd   (the tapped date becomes the new start)
//! ```
//!
//! Rejected selections (end before start, date before the minimum) leave the
//! state exactly as it was so the user can pick again.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ItineraryError, Result},
    models::DateRange,
};

/// Observable phase of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    AwaitingStart,
    AwaitingEnd,
    Complete,
}

/// Selection state; each variant carries exactly the dates valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    AwaitingStart,
    AwaitingEnd {
        start: Date,
    },
    Complete(DateRange),
}

impl SelectionState {
    /// The mode this state is in.
    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionState::AwaitingStart => SelectionMode::AwaitingStart,
            SelectionState::AwaitingEnd { .. } => SelectionMode::AwaitingEnd,
            SelectionState::Complete(_) => SelectionMode::Complete,
        }
    }
}

/// Snapshot of the dates picked so far, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl PartialRange {
    /// The full range once both ends are present.
    pub fn complete(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }
}

/// Collects a valid `(start, end)` pair through sequential date picks.
#[derive(Debug, Clone, Default)]
pub struct DateRangeSelector {
    state: SelectionState,
    minimum: Option<Date>,
}

impl DateRangeSelector {
    /// Creates a selector awaiting its start date, with no minimum date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any date earlier than `minimum` (for example "today").
    pub fn with_minimum_date(mut self, minimum: Date) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Replaces the minimum selectable date. Already selected dates are kept.
    pub fn set_minimum_date(&mut self, minimum: Option<Date>) {
        self.minimum = minimum;
    }

    /// The earliest date `select_date` accepts, if constrained.
    pub fn minimum_date(&self) -> Option<Date> {
        self.minimum
    }

    /// Restarts the selection, discarding any picked dates.
    pub fn begin(&mut self) {
        self.state = SelectionState::AwaitingStart;
    }

    /// Feeds one picked date into the selection.
    ///
    /// # Errors
    ///
    /// - [`ItineraryError::DateOutOfRange`] if `date` is before the minimum
    /// - [`ItineraryError::InvalidRange`] if awaiting the end date and `date`
    ///   precedes the start
    ///
    /// In both cases the state is left untouched.
    pub fn select_date(&mut self, date: Date) -> Result<SelectionMode> {
        if let Some(minimum) = self.minimum {
            if date < minimum {
                return Err(ItineraryError::DateOutOfRange { date, minimum });
            }
        }

        self.state = match self.state {
            SelectionState::AwaitingStart | SelectionState::Complete(_) => {
                SelectionState::AwaitingEnd { start: date }
            }
            SelectionState::AwaitingEnd { start } => {
                SelectionState::Complete(DateRange::new(start, date)?)
            }
        };
        Ok(self.state.mode())
    }

    /// Current phase of the selection.
    pub fn mode(&self) -> SelectionMode {
        self.state.mode()
    }

    /// Current state, including the picked dates.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Dates picked so far; observation only.
    pub fn current_range(&self) -> PartialRange {
        match self.state {
            SelectionState::AwaitingStart => PartialRange::default(),
            SelectionState::AwaitingEnd { start } => PartialRange {
                start: Some(start),
                end: None,
            },
            SelectionState::Complete(range) => PartialRange {
                start: Some(range.start),
                end: Some(range.end),
            },
        }
    }

    /// The selected range once the selection is complete.
    pub fn range(&self) -> Option<DateRange> {
        match self.state {
            SelectionState::Complete(range) => Some(range),
            _ => None,
        }
    }

    /// Runs a whole selection from a fresh start and returns the range.
    ///
    /// Used by flows that receive both dates at once but still need the
    /// selector's validation rules.
    pub fn select_range(&mut self, start: Date, end: Date) -> Result<DateRange> {
        self.begin();
        self.select_date(start)?;
        if let Err(err) = self.select_date(end) {
            self.begin();
            return Err(err);
        }
        self.range().ok_or_else(|| ItineraryError::Configuration {
            message: "date selection did not complete".to_string(),
        })
    }
}
