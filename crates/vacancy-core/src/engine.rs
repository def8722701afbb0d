//! Availability decisions over a snapshot of reserved intervals.
//!
//! [`Availability`] is the single source of truth for every per-day
//! question the calendar asks: is a day blocked, is it in the past, can it
//! still serve as a range endpoint, where does the next blocking boundary
//! lie, and would a proposed range cross a reservation. All methods are
//! pure functions over the borrowed snapshot and are cheap enough to call
//! for every visible day on every render.

use jiff::civil::Date;

use crate::models::{Interval, Selection};

/// Pure availability queries over a snapshot of reserved intervals.
///
/// Only intervals with `blocking: true` participate in any decision;
/// non-blocking intervals are carried for rendering and never restrict a
/// selection.
#[derive(Debug, Clone, Copy)]
pub struct Availability<'a> {
    intervals: &'a [Interval],
}

impl<'a> Availability<'a> {
    /// Wraps a snapshot of intervals.
    pub fn new(intervals: &'a [Interval]) -> Self {
        Self { intervals }
    }

    fn blocking(&self) -> impl Iterator<Item = &'a Interval> {
        self.intervals.iter().filter(|interval| interval.blocking)
    }

    /// True iff `day` falls within a blocking interval, both ends inclusive.
    ///
    /// The boundary days of a reservation are themselves unavailable as new
    /// selection endpoints, so two bookings can never touch.
    pub fn is_blocked(&self, day: Date) -> bool {
        self.blocking().any(|interval| interval.contains(day))
    }

    /// True iff `day` is strictly before `today`.
    ///
    /// Past days are never selectable, regardless of blocking status.
    pub fn is_past_day(&self, day: Date, today: Date) -> bool {
        day < today
    }

    /// True iff `day` cannot serve as the next endpoint of `selection`.
    ///
    /// Past days are always outside. With a start picked and no end yet,
    /// days beyond the nearest blocking boundary are outside; otherwise
    /// there is no restriction.
    pub fn is_outside_range(&self, day: Date, selection: &Selection, today: Date) -> bool {
        if self.is_past_day(day, today) {
            return true;
        }
        match (selection.start(), selection.end()) {
            (Some(start), None) => self
                .closest_boundary_after(start)
                .is_some_and(|boundary| day > boundary),
            _ => false,
        }
    }

    /// Start date of the nearest blocking interval strictly after `date`.
    ///
    /// An interval that starts on `date` itself is the pivot, not a forward
    /// boundary, and is skipped. Returns `None` when no interval restricts
    /// the range.
    pub fn closest_boundary_after(&self, date: Date) -> Option<Date> {
        self.blocking()
            .map(|interval| interval.start)
            .filter(|&start| start > date)
            .min()
    }

    /// True iff a blocking interval edge falls strictly inside the open
    /// span between the two candidates.
    ///
    /// Touching edges do not count as a crossing, so a selected range may
    /// abut a reservation. The candidates may be given in either order.
    pub fn crosses_reservation(&self, start_candidate: Date, end_candidate: Date) -> bool {
        let (lo, hi) = if start_candidate <= end_candidate {
            (start_candidate, end_candidate)
        } else {
            (end_candidate, start_candidate)
        };
        self.blocking().any(|interval| {
            (lo < interval.start && interval.start < hi) || (lo < interval.end && interval.end < hi)
        })
    }
}
