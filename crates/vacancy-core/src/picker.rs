//! Two-phase selection state machine.
//!
//! [`Picker`] owns the [`Selection`] and applies every transition to it:
//! user picks, resets, and focus changes. Each transition is total and
//! reports an explicit [`PickOutcome`], so callers always learn whether a
//! pick was applied, refused, or restarted the selection. No other
//! component mutates the selection.

use jiff::civil::Date;

use crate::engine::Availability;
use crate::models::{Focus, Phase, Selection};

/// Why a pick was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The day falls inside a blocking reservation
    Blocked,
    /// The day is before the reference date
    Past,
}

/// Outcome of a pick transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The pick was applied to the selection
    Accepted,
    /// The pick was refused; the selection is unchanged
    Rejected(RejectReason),
    /// The pick discarded the previous selection and began a new one
    Restarted,
}

/// Owns the selection and applies user picks to it.
#[derive(Debug, Default)]
pub struct Picker {
    selection: Selection,
}

impl Picker {
    /// Creates a picker with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Applies a user pick for `day` against the current snapshot.
    ///
    /// Blocked and past days are refused in every phase, leaving the
    /// selection untouched. From [`Phase::Empty`] a valid pick opens a new
    /// range. From [`Phase::PendingEnd`] a valid pick closes the range,
    /// unless it lands before the pending start or the span would cross a
    /// reservation, in which case the selection restarts at the picked day;
    /// with focus moved back to the start, the pick replaces the start
    /// instead of closing. From [`Phase::Complete`] any valid pick begins a
    /// fresh range.
    pub fn pick(&mut self, day: Date, availability: &Availability<'_>, today: Date) -> PickOutcome {
        if availability.is_past_day(day, today) {
            return PickOutcome::Rejected(RejectReason::Past);
        }
        if availability.is_blocked(day) {
            return PickOutcome::Rejected(RejectReason::Blocked);
        }
        match self.selection.phase() {
            Phase::Empty => {
                self.begin(day);
                PickOutcome::Accepted
            }
            Phase::PendingEnd if self.selection.focus == Focus::Start => {
                self.selection.start = Some(day);
                self.selection.focus = Focus::End;
                PickOutcome::Accepted
            }
            Phase::PendingEnd => {
                let Some(start) = self.selection.start else {
                    self.begin(day);
                    return PickOutcome::Accepted;
                };
                if day < start || availability.crosses_reservation(start, day) {
                    // Spanning a reservation (or stepping back before the
                    // start) abandons the old start.
                    self.begin(day);
                    return PickOutcome::Restarted;
                }
                self.selection.end = Some(day);
                self.selection.focus = Focus::Start;
                PickOutcome::Accepted
            }
            Phase::Complete => {
                self.begin(day);
                PickOutcome::Restarted
            }
        }
    }

    /// Clears the selection. Idempotent.
    pub fn reset(&mut self) {
        self.selection = Selection::default();
    }

    /// Moves focus to the endpoint subsequent picks target.
    ///
    /// An absent value falls back to [`Focus::Start`]. Endpoints are left
    /// untouched.
    pub fn focus_change(&mut self, focus: Option<Focus>) {
        self.selection.focus = focus.unwrap_or_default();
    }

    fn begin(&mut self, day: Date) {
        self.selection = Selection {
            start: Some(day),
            end: None,
            focus: Focus::End,
        };
    }
}
