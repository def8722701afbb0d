//! Vacancy CLI application
//!
//! Command-line interface for the date-range availability engine: loads a
//! reservation file through the core's interval-source contract and exposes
//! the per-day query surface and a pick simulator.

mod args;
mod cli;
mod source;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::Zoned;
use log::info;
use source::FileSource;
use vacancy_core::{Config, ReloadOutcome, Session};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        file,
        config,
        today,
        command,
    } = Args::parse();

    let config = match config {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str::<Config>(&text).context("Failed to parse config file")?
        }
        None => Config::default(),
    };

    let file = file
        .or_else(|| (!config.url.is_empty()).then(|| PathBuf::from(&config.url)))
        .context("No reservations file given (use --file or a config with \"url\")")?;

    let today = today.unwrap_or_else(|| Zoned::now().date());
    let reference = command.reference_date(today);

    let mut session = Session::with_config(config);
    let source = FileSource::new(file);
    if let ReloadOutcome::Failed(message) = session.reload(&source, reference).await {
        bail!("Failed to load reservations: {message}");
    }
    info!("Loaded {} reservations", session.intervals().len());

    let mut cli = Cli::new(session, today);
    match command {
        Check { day } => cli.check(day),
        Boundary { date } => cli.boundary(date),
        Validate { start, end } => cli.validate(start, end),
        Month { month } => cli.month(month),
        Simulate { picks, commit } => cli.simulate(picks, commit),
    }

    Ok(())
}
