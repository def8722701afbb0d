//! File-backed interval source.

use std::path::PathBuf;

use vacancy_core::{FetchWindow, IntervalSource, RawInterval, Result, VacancyError};

/// Reads reservations from a JSON file, honoring the fetch-window contract.
///
/// Stands in for the HTTP endpoint a host application would supply: only
/// entries overlapping the requested window are returned, the way a real
/// endpoint serves the visible months. Entries whose bounds cannot be
/// parsed are passed through so the store can report them.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl IntervalSource for FileSource {
    async fn load_intervals(&self, window: &FetchWindow) -> Result<Vec<RawInterval>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| VacancyError::Fetch {
            message: format!("{}: {e}", self.path.display()),
        })?;
        let entries: Vec<RawInterval> = serde_json::from_str(&text)?;
        Ok(entries
            .into_iter()
            .filter(|entry| overlaps_window(entry, window))
            .collect())
    }
}

fn overlaps_window(entry: &RawInterval, window: &FetchWindow) -> bool {
    match (entry.start_day(), entry.end_day()) {
        (Some(start), Some(end)) => start <= window.end && end >= window.start,
        _ => true,
    }
}
