//! Wholesale-replaceable store of reserved intervals.

use log::warn;

use crate::models::{Interval, RawInterval};

/// Outcome of loading a batch of raw reservation entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries accepted into the store
    pub accepted: usize,
    /// Entries dropped as malformed
    pub dropped: usize,
}

/// Holds the current set of reserved intervals.
///
/// The set is replaced wholesale on each [`load`](IntervalStore::load) and
/// never patched in place, so a snapshot taken via
/// [`all`](IntervalStore::all) stays coherent for the duration of a render
/// or decision.
#[derive(Debug, Default)]
pub struct IntervalStore {
    intervals: Vec<Interval>,
}

impl IntervalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set atomically, dropping malformed entries.
    ///
    /// Each dropped entry is logged and counted; one bad entry does not
    /// abort the rest of the batch.
    pub fn load(&mut self, raw: Vec<RawInterval>) -> LoadReport {
        let mut report = LoadReport::default();
        let mut intervals = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            match entry.validate(index) {
                Ok(interval) => {
                    intervals.push(interval);
                    report.accepted += 1;
                }
                Err(err) => {
                    warn!("dropping reservation entry: {err}");
                    report.dropped += 1;
                }
            }
        }
        self.intervals = intervals;
        report
    }

    /// Read-only snapshot of the current set.
    pub fn all(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals currently held.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True when no intervals are loaded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
