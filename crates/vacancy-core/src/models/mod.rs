//! Domain models for reserved intervals and range selections.
//!
//! This module contains the data carried through the engine: the wire-level
//! [`RawInterval`] delivered by an interval source, the validated
//! [`Interval`] it normalizes into, the two-phase [`Selection`] mutated by
//! the picker, and the host [`Config`] options.
//!
//! All decision logic lives elsewhere ([`crate::engine`], [`crate::picker`]);
//! the models only hold data and the parsing needed to produce it.

pub mod config;
pub mod interval;
pub mod selection;


// Re-export all public types at the models level
pub use config::Config;
pub use interval::{Interval, RawInterval};
pub use selection::{Focus, Phase, Selection};
