//! Selection state for the two-phase date-range pick.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Which endpoint the next user pick mutates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    /// The next pick sets the range start
    #[default]
    Start,

    /// The next pick sets the range end
    End,
}

impl Focus {
    /// Maps a host-supplied focus value.
    ///
    /// Hosts report focus as `"startDate"`/`"endDate"`; anything unknown or
    /// absent falls back to [`Focus::Start`].
    pub fn from_host(value: Option<&str>) -> Self {
        match value {
            Some("end" | "endDate") => Focus::End,
            _ => Focus::Start,
        }
    }
}

/// Progress of the two-phase selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No endpoint chosen yet
    Empty,
    /// Start chosen, end still pending
    PendingEnd,
    /// Both endpoints chosen
    Complete,
}

/// A tentative date-range selection.
///
/// Invariants: an end is only ever set alongside a start with
/// `start <= end`, and the span between them never crosses a blocking
/// reservation's interior. The fields are private so that only the
/// [`crate::picker::Picker`] transition functions can mutate them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub(crate) start: Option<Date>,
    pub(crate) end: Option<Date>,
    #[serde(default)]
    pub(crate) focus: Focus,
}

impl Selection {
    /// Chosen start date, if any.
    pub fn start(&self) -> Option<Date> {
        self.start
    }

    /// Chosen end date, if any.
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// Endpoint the next pick targets.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current phase, derived from which endpoints are set.
    pub fn phase(&self) -> Phase {
        match (self.start, self.end) {
            (Some(_), Some(_)) => Phase::Complete,
            (Some(_), None) => Phase::PendingEnd,
            (None, _) => Phase::Empty,
        }
    }

    /// True once both endpoints are chosen.
    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }
}
