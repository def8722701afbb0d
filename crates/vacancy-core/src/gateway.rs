//! Commit gateway reporting a finished selection to the host.

use jiff::civil::Date;
use log::warn;

use crate::models::Selection;

/// Fixed message reported when committing an incomplete selection.
pub const INCOMPLETE_RANGE_MESSAGE: &str = "please select date range!";

/// Host-side consumer of commit results.
///
/// Exactly one of the two callbacks fires per commit attempt. Errors
/// returned by the consumer are logged and never propagated; once the
/// gateway has determined completeness, the commit is fire-and-forget.
pub trait RangeConsumer {
    /// Receives an accepted date range.
    fn on_set_date_range(&mut self, start: Date, end: Date) -> anyhow::Result<()>;

    /// Receives the failure signal for an incomplete selection.
    fn on_set_date_range_failed(&mut self, message: &str) -> anyhow::Result<()>;
}

/// How a commit attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The range was forwarded to the consumer
    Committed,
    /// The selection was incomplete; the failure callback fired
    Incomplete,
}

/// Validates `selection` for completeness and reports it to `consumer`.
pub fn commit(selection: &Selection, consumer: &mut dyn RangeConsumer) -> CommitOutcome {
    match (selection.start(), selection.end()) {
        (Some(start), Some(end)) => {
            if let Err(err) = consumer.on_set_date_range(start, end) {
                warn!("range consumer failed: {err}");
            }
            CommitOutcome::Committed
        }
        _ => {
            if let Err(err) = consumer.on_set_date_range_failed(INCOMPLETE_RANGE_MESSAGE) {
                warn!("range consumer failed: {err}");
            }
            CommitOutcome::Incomplete
        }
    }
}
