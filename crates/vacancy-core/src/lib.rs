//! Core library for the Vacancy date-range availability engine.
//!
//! Given a set of reserved intervals (bookings), this crate decides which
//! days are blocked, which days may still serve as range endpoints, where
//! the nearest blocking boundary lies after a chosen start, and whether a
//! proposed range crosses a reservation. A small state machine tracks the
//! two-phase start/end pick, and a commit gateway reports finished ranges
//! to the host application.
//!
//! # Architecture
//!
//! Data flows leaf to root:
//!
//! ```text
//! ┌───────────────┐   ┌──────────────┐   ┌──────────┐   ┌──────────┐
//! │ IntervalStore │──▶│ Availability │──▶│  Picker  │──▶│ gateway  │
//! │  (snapshot)   │   │  (queries)   │   │ (states) │   │ (commit) │
//! └───────────────┘   └──────────────┘   └──────────┘   └──────────┘
//! ```
//!
//! [`Session`] owns the whole chain for one calendar and adds the
//! version-stamped reload protocol for the external [`IntervalSource`].
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use vacancy_core::{Availability, Interval, PickOutcome, Picker};
//!
//! # fn example() -> vacancy_core::Result<()> {
//! let reservations = vec![Interval::new(date(2024, 5, 10), date(2024, 5, 12))?];
//! let availability = Availability::new(&reservations);
//! assert!(availability.is_blocked(date(2024, 5, 11)));
//!
//! let today = date(2024, 5, 1);
//! let mut picker = Picker::new();
//! assert_eq!(
//!     picker.pick(date(2024, 5, 2), &availability, today),
//!     PickOutcome::Accepted
//! );
//! assert_eq!(
//!     picker.pick(date(2024, 5, 8), &availability, today),
//!     PickOutcome::Accepted
//! );
//! assert!(picker.selection().is_complete());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod models;
pub mod picker;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use engine::Availability;
pub use error::{Result, VacancyError};
pub use gateway::{commit, CommitOutcome, RangeConsumer, INCOMPLETE_RANGE_MESSAGE};
pub use models::{Config, Focus, Interval, Phase, RawInterval, Selection};
pub use picker::{PickOutcome, Picker, RejectReason};
pub use session::{FetchWindow, IntervalSource, ReloadOutcome, ReloadTicket, Session};
pub use store::{IntervalStore, LoadReport};
