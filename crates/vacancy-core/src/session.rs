//! Session state tying the store, picker, and interval source together.
//!
//! A [`Session`] is the single owner of all mutable picker state for one
//! calendar: the UI event loop forwards picks, resets, focus changes, and
//! reload results here, and reads availability back synchronously. Nothing
//! in this module blocks; the only asynchronous boundary is the
//! [`IntervalSource`] fetch, and its results are version-stamped so that
//! the latest reload always wins when the user pages months quickly.

use jiff::civil::Date;
use jiff::ToSpan;
use log::{debug, warn};

use crate::engine::Availability;
use crate::error::Result;
use crate::gateway::{self, CommitOutcome, RangeConsumer};
use crate::models::{Config, Focus, Interval, RawInterval, Selection};
use crate::picker::{PickOutcome, Picker};
use crate::store::{IntervalStore, LoadReport};

/// The calendar window a reload fetches.
///
/// Spans from the first day of the reference month through the first day
/// two months later, covering three rendered months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    /// First day of the window (inclusive)
    pub start: Date,
    /// First day of the month after the window
    pub end: Date,
}

impl FetchWindow {
    /// Window for the month containing `reference`.
    pub fn for_month(reference: Date) -> Self {
        let start = reference.first_of_month();
        let end = start.saturating_add(2.months());
        Self { start, end }
    }

    /// Window start formatted for the collaborator (`YYYY-MM-DD`).
    pub fn start_param(&self) -> String {
        self.start.to_string()
    }

    /// Window end formatted for the collaborator (`YYYY-MM-DD`).
    pub fn end_param(&self) -> String {
        self.end.to_string()
    }
}

/// Supplies reservation entries for a calendar window.
///
/// Implementations are collaborators outside the engine: an HTTP endpoint,
/// a file, a fixture. Transport concerns (retries, timeouts) belong to the
/// implementation; the session only cares about the resulting entries or a
/// failure message.
#[allow(async_fn_in_trait)]
pub trait IntervalSource {
    /// Fetches the reservations overlapping `window`.
    async fn load_intervals(&self, window: &FetchWindow) -> Result<Vec<RawInterval>>;
}

/// Version stamp for an in-flight reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket {
    seq: u64,
    window: FetchWindow,
}

impl ReloadTicket {
    /// Window this reload covers.
    pub fn window(&self) -> FetchWindow {
        self.window
    }
}

/// How a finished reload was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The snapshot was replaced
    Applied(LoadReport),
    /// The fetch failed; the session shows an error state until the next
    /// successful reload
    Failed(String),
    /// A newer reload was started after this one; the result was discarded
    Superseded,
}

/// Single-owner session state for one calendar picker.
#[derive(Debug, Default)]
pub struct Session {
    store: IntervalStore,
    picker: Picker,
    config: Config,
    reload_seq: u64,
    loading: bool,
    error: Option<String>,
}

impl Session {
    /// Creates a session with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with host configuration applied.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Host configuration options.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True while a reload is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last fetch failure, cleared by the next successful reload.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        self.picker.selection()
    }

    /// Snapshot of the loaded intervals, rendering hints included.
    pub fn intervals(&self) -> &[Interval] {
        self.store.all()
    }

    /// Availability queries over the current snapshot.
    pub fn availability(&self) -> Availability<'_> {
        Availability::new(self.store.all())
    }

    /// True iff `day` falls within a blocking reservation.
    pub fn is_blocked(&self, day: Date) -> bool {
        self.availability().is_blocked(day)
    }

    /// True iff `day` cannot serve as the next endpoint of the current
    /// selection.
    pub fn is_outside_range(&self, day: Date, today: Date) -> bool {
        self.availability()
            .is_outside_range(day, self.picker.selection(), today)
    }

    /// Start of the nearest blocking interval strictly after `date`.
    pub fn closest_boundary_after(&self, date: Date) -> Option<Date> {
        self.availability().closest_boundary_after(date)
    }

    /// Forwards a user pick for `day`.
    pub fn pick(&mut self, day: Date, today: Date) -> PickOutcome {
        let availability = Availability::new(self.store.all());
        self.picker.pick(day, &availability, today)
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.picker.reset();
    }

    /// Moves focus to the endpoint subsequent picks target.
    pub fn focus_change(&mut self, focus: Option<Focus>) {
        self.picker.focus_change(focus);
    }

    /// Commits the current selection to `consumer`.
    ///
    /// A committed selection is cleared afterwards; an incomplete one is
    /// left for the user to finish.
    pub fn commit(&mut self, consumer: &mut dyn RangeConsumer) -> CommitOutcome {
        let outcome = gateway::commit(self.picker.selection(), consumer);
        if outcome == CommitOutcome::Committed {
            self.picker.reset();
        }
        outcome
    }

    /// Stamps a new reload for the month containing `reference`.
    ///
    /// Starting a new reload supersedes any outstanding one; only the
    /// ticket issued last can still be applied.
    pub fn begin_reload(&mut self, reference: Date) -> ReloadTicket {
        self.reload_seq += 1;
        self.loading = true;
        let window = FetchWindow::for_month(reference);
        debug!(
            "reload {} for window {}..{}",
            self.reload_seq,
            window.start_param(),
            window.end_param()
        );
        ReloadTicket {
            seq: self.reload_seq,
            window,
        }
    }

    /// Applies a finished reload, discarding stale results.
    pub fn complete_reload(
        &mut self,
        ticket: ReloadTicket,
        result: Result<Vec<RawInterval>>,
    ) -> ReloadOutcome {
        if ticket.seq != self.reload_seq {
            debug!("discarding stale reload {}", ticket.seq);
            return ReloadOutcome::Superseded;
        }
        self.loading = false;
        match result {
            Ok(raw) => {
                let report = self.store.load(raw);
                self.error = None;
                ReloadOutcome::Applied(report)
            }
            Err(err) => {
                let message = err.to_string();
                warn!("reload failed: {message}");
                self.error = Some(message.clone());
                ReloadOutcome::Failed(message)
            }
        }
    }

    /// Fetches and applies the window for `reference` in one call.
    pub async fn reload<S: IntervalSource>(
        &mut self,
        source: &S,
        reference: Date,
    ) -> ReloadOutcome {
        let ticket = self.begin_reload(reference);
        let result = source.load_intervals(&ticket.window).await;
        self.complete_reload(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_fetch_window_spans_two_month_boundaries() {
        let window = FetchWindow::for_month(date(2024, 5, 15));
        assert_eq!(window.start, date(2024, 5, 1));
        assert_eq!(window.end, date(2024, 7, 1));
        assert_eq!(window.start_param(), "2024-05-01");
        assert_eq!(window.end_param(), "2024-07-01");
    }

    #[test]
    fn test_fetch_window_rolls_over_year_end() {
        let window = FetchWindow::for_month(date(2024, 12, 3));
        assert_eq!(window.start, date(2024, 12, 1));
        assert_eq!(window.end, date(2025, 2, 1));
    }

    #[test]
    fn test_fetch_window_from_first_of_month() {
        let window = FetchWindow::for_month(date(2024, 5, 1));
        assert_eq!(window.start, date(2024, 5, 1));
        assert_eq!(window.end, date(2024, 7, 1));
    }
}
