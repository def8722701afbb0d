//! Host configuration options.

use serde::{Deserialize, Serialize};

/// Options recognized from the host application.
///
/// `url` points the interval source at its reservation feed. The button
/// flags are UI hints telling the host whether to render the explicit
/// commit and reset controls; the engine itself never reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Endpoint the interval source reads reservations from
    pub url: String,

    /// Show the explicit "set date range" commit control
    pub button_set_date_range: bool,

    /// Show the reset control
    pub button_clear: bool,
}
