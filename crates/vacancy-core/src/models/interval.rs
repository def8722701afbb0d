//! Reservation interval models and wire parsing.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VacancyError};

/// A reservation entry as delivered by an interval source.
///
/// Bounds arrive as strings in either `YYYY-MM-DD` or
/// `YYYY-MM-DD HH:MM:SS` form. Entries with a missing or unparseable bound
/// are dropped (with a report) when loaded into the store; they never abort
/// the rest of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawInterval {
    /// Start bound of the reservation
    pub start: Option<String>,

    /// End bound of the reservation
    pub end: Option<String>,

    /// Human-readable label for the reservation
    pub label: Option<String>,

    /// Rendering hint for the UI collaborator; never inspected by the engine
    pub color: Option<String>,

    /// Whether the reservation blocks selection (defaults to true)
    #[serde(default = "default_blocking")]
    pub blocking: bool,
}

fn default_blocking() -> bool {
    true
}

impl RawInterval {
    /// Creates a blocking entry spanning `start..end` (wire strings).
    pub fn span(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            label: None,
            color: None,
            blocking: true,
        }
    }

    /// Start bound parsed to a day, if present and well-formed.
    pub fn start_day(&self) -> Option<Date> {
        self.start.as_deref().and_then(|s| parse_day(s).ok())
    }

    /// End bound parsed to a day, if present and well-formed.
    pub fn end_day(&self) -> Option<Date> {
        self.end.as_deref().and_then(|s| parse_day(s).ok())
    }

    /// Validates the entry into an [`Interval`].
    ///
    /// Both bounds are normalized to start-of-day. `index` identifies the
    /// entry within its batch for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`VacancyError::MalformedInterval`] when a bound is missing,
    /// unparseable, or the start falls after the end.
    pub fn validate(self, index: usize) -> Result<Interval> {
        let start = parse_bound(self.start.as_deref(), "start", index)?;
        let end = parse_bound(self.end.as_deref(), "end", index)?;
        if start > end {
            return Err(VacancyError::MalformedInterval {
                index,
                reason: format!("start {start} is after end {end}"),
            });
        }
        Ok(Interval {
            start,
            end,
            label: self.label,
            color: self.color,
            blocking: self.blocking,
        })
    }
}

/// A validated reservation interval at whole-day granularity.
///
/// Both bounds are inclusive: the boundary days of a reservation are
/// themselves unavailable as new selection endpoints, so two bookings can
/// never touch. `label` and `color` are opaque hints carried through for the
/// UI collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interval {
    /// First reserved day (inclusive)
    pub start: Date,

    /// Last reserved day (inclusive)
    pub end: Date,

    /// Human-readable label for the reservation
    pub label: Option<String>,

    /// Rendering hint for the UI collaborator
    pub color: Option<String>,

    /// Whether the reservation blocks selection
    pub blocking: bool,
}

impl Interval {
    /// Creates a blocking interval spanning `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`VacancyError::InvalidRange`] when `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(VacancyError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            label: None,
            color: None,
            blocking: true,
        })
    }

    /// True iff `day` falls within the inclusive span.
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Parses a wire date, normalizing to start-of-day.
fn parse_day(value: &str) -> std::result::Result<Date, jiff::Error> {
    if let Ok(date) = value.parse::<Date>() {
        return Ok(date);
    }
    DateTime::strptime("%Y-%m-%d %H:%M:%S", value).map(|dt| dt.date())
}

fn parse_bound(value: Option<&str>, field: &str, index: usize) -> Result<Date> {
    let Some(value) = value else {
        return Err(VacancyError::MalformedInterval {
            index,
            reason: format!("missing {field}"),
        });
    };
    parse_day(value).map_err(|e| VacancyError::MalformedInterval {
        index,
        reason: format!("bad {field} '{value}': {e}"),
    })
}
