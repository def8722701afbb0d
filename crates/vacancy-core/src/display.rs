//! Plain-text display wrappers for selections and availability.
//!
//! Following the newtype-wrapper approach, these types borrow engine data
//! and implement [`std::fmt::Display`] so the same state can be rendered in
//! different contexts (a single-day report, a month grid) without any
//! formatting logic leaking into the engine.

use std::fmt;

use jiff::civil::{date, Date};

use crate::engine::Availability;
use crate::models::Selection;

/// Formats a selection as `start .. end`, with placeholders for the
/// unfinished phases.
pub struct SelectionDisplay<'a>(pub &'a Selection);

impl fmt::Display for SelectionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.start(), self.0.end()) {
            (Some(start), Some(end)) => write!(f, "{start} .. {end}"),
            (Some(start), None) => write!(f, "{start} .. (pick an end date)"),
            _ => write!(f, "(no selection)"),
        }
    }
}

/// One day's availability verdicts.
pub struct DayReport<'a> {
    /// Day being reported on
    pub day: Date,
    /// Reference date standing in for "today"
    pub today: Date,
    /// Snapshot to answer against
    pub availability: Availability<'a>,
    /// Selection in progress
    pub selection: &'a Selection,
}

impl fmt::Display for DayReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.day)?;
        writeln!(f, "- Blocked: {}", yes_no(self.availability.is_blocked(self.day)))?;
        writeln!(
            f,
            "- Past: {}",
            yes_no(self.availability.is_past_day(self.day, self.today))
        )?;
        writeln!(
            f,
            "- Outside range: {}",
            yes_no(
                self.availability
                    .is_outside_range(self.day, self.selection, self.today)
            )
        )
    }
}

/// A textual month grid marking each day's availability.
///
/// Markers: `*` selection endpoint, `x` blocked, `<` past, `!` outside the
/// selectable range, `.` free.
pub struct MonthView<'a> {
    /// Any day inside the month to render
    pub month: Date,
    /// Reference date standing in for "today"
    pub today: Date,
    /// Snapshot to answer against
    pub availability: Availability<'a>,
    /// Selection in progress
    pub selection: &'a Selection,
}

impl MonthView<'_> {
    fn marker(&self, day: Date) -> char {
        if Some(day) == self.selection.start() || Some(day) == self.selection.end() {
            '*'
        } else if self.availability.is_blocked(day) {
            'x'
        } else if self.availability.is_past_day(day, self.today) {
            '<'
        } else if self
            .availability
            .is_outside_range(day, self.selection, self.today)
        {
            '!'
        } else {
            '.'
        }
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.month.first_of_month();
        writeln!(f, "## {}", first.strftime("%B %Y"))?;
        for day_number in 1..=self.month.days_in_month() {
            let day = date(first.year(), first.month(), day_number);
            write!(f, "{day_number:>3}{}", self.marker(day))?;
            if day_number % 7 == 0 {
                writeln!(f)?;
            }
        }
        if self.month.days_in_month() % 7 != 0 {
            writeln!(f)?;
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
