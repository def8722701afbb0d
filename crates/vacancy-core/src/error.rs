//! Error types for the availability engine.

use jiff::civil::Date;
use thiserror::Error;

/// Comprehensive error type for all vacancy operations.
///
/// None of these kinds are fatal: malformed entries are dropped on load,
/// fetch failures leave the session in a visible error state that the next
/// reload clears, and range/serialization errors stay local to the call that
/// produced them. Rejected picks and incomplete commits are outcomes, not
/// errors, and are reported through [`crate::picker::PickOutcome`] and
/// [`crate::gateway::CommitOutcome`] instead.
#[derive(Error, Debug)]
pub enum VacancyError {
    /// A reservation entry could not be parsed into an interval
    #[error("Malformed interval at entry {index}: {reason}")]
    MalformedInterval { index: usize, reason: String },
    /// The interval source failed to deliver a window
    #[error("Fetch failed: {message}")]
    Fetch { message: String },
    /// An interval was constructed with its end before its start
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: Date, end: Date },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for vacancy operations
pub type Result<T> = std::result::Result<T, VacancyError>;
