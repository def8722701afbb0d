//! Shared fixtures for the integration test suites.

use jiff::civil::Date;
use vacancy_core::{
    FetchWindow, IntervalSource, RangeConsumer, RawInterval, Result, VacancyError,
};

/// Source that returns the same entries for every window.
pub struct StaticSource {
    pub entries: Vec<RawInterval>,
}

impl StaticSource {
    pub fn new(entries: Vec<RawInterval>) -> Self {
        Self { entries }
    }
}

impl IntervalSource for StaticSource {
    async fn load_intervals(&self, _window: &FetchWindow) -> Result<Vec<RawInterval>> {
        Ok(self.entries.clone())
    }
}

/// Source that always fails, standing in for a broken endpoint.
pub struct FailingSource;

impl IntervalSource for FailingSource {
    async fn load_intervals(&self, _window: &FetchWindow) -> Result<Vec<RawInterval>> {
        Err(VacancyError::Fetch {
            message: "endpoint unreachable".to_string(),
        })
    }
}

/// Consumer that records every callback it receives.
#[derive(Default)]
pub struct RecordingConsumer {
    pub accepted: Vec<(Date, Date)>,
    pub rejected: Vec<String>,
}

impl RangeConsumer for RecordingConsumer {
    fn on_set_date_range(&mut self, start: Date, end: Date) -> anyhow::Result<()> {
        self.accepted.push((start, end));
        Ok(())
    }

    fn on_set_date_range_failed(&mut self, message: &str) -> anyhow::Result<()> {
        self.rejected.push(message.to_string());
        Ok(())
    }
}
