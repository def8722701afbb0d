use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

/// Command-line interface for the Vacancy availability checker
///
/// Vacancy answers, for a set of reserved date intervals, which days are
/// blocked, which days can still serve as selection endpoints, and whether
/// a proposed date range would cross a reservation. Reservations are read
/// from a JSON file through the same source contract a host application
/// would implement over HTTP.
#[derive(Parser)]
#[command(version, about, name = "vacancy")]
pub struct Args {
    /// Path to the reservations JSON file
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to a host configuration JSON file (url, button flags)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date standing in for today (YYYY-MM-DD, defaults to the
    /// system date)
    #[arg(long, global = true)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Vacancy CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Report blocked/past/outside verdicts for one day
    Check {
        /// Day to check (YYYY-MM-DD)
        day: Date,
    },
    /// Find the nearest blocking boundary after a date
    Boundary {
        /// Pivot date (YYYY-MM-DD)
        date: Date,
    },
    /// Check whether a proposed range crosses a reservation
    Validate {
        /// Proposed range start (YYYY-MM-DD)
        start: Date,
        /// Proposed range end (YYYY-MM-DD)
        end: Date,
    },
    /// Render a month availability grid
    Month {
        /// Any day inside the month to render (YYYY-MM-DD)
        month: Date,
    },
    /// Feed a sequence of picks through the selection state machine
    Simulate {
        /// Days to pick, in order (YYYY-MM-DD)
        #[arg(required = true)]
        picks: Vec<Date>,
        /// Attempt to commit the final selection
        #[arg(long)]
        commit: bool,
    },
}

impl Commands {
    /// Date whose surrounding months the reservations are fetched for.
    pub fn reference_date(&self, today: Date) -> Date {
        match self {
            Commands::Check { day } => *day,
            Commands::Boundary { date } => *date,
            Commands::Validate { start, .. } => *start,
            Commands::Month { month } => *month,
            Commands::Simulate { picks, .. } => picks.first().copied().unwrap_or(today),
        }
    }
}
