//! Command handlers printing plain-text reports.

use jiff::civil::Date;
use vacancy_core::{
    display::{DayReport, MonthView, SelectionDisplay},
    PickOutcome, RangeConsumer, RejectReason, Session,
};

/// Executes CLI commands against a loaded session.
pub struct Cli {
    session: Session,
    today: Date,
}

impl Cli {
    /// Wraps a session whose snapshot has already been loaded.
    pub fn new(session: Session, today: Date) -> Self {
        Self { session, today }
    }

    /// Reports one day's availability verdicts.
    pub fn check(&self, day: Date) {
        let report = DayReport {
            day,
            today: self.today,
            availability: self.session.availability(),
            selection: self.session.selection(),
        };
        print!("{report}");
    }

    /// Reports the nearest blocking boundary after `date`.
    pub fn boundary(&self, date: Date) {
        match self.session.closest_boundary_after(date) {
            Some(boundary) => println!("Nearest boundary after {date}: {boundary}"),
            None => println!("No boundary after {date}; the range is unrestricted."),
        }
    }

    /// Reports whether the proposed range would cross a reservation.
    pub fn validate(&self, start: Date, end: Date) {
        let availability = self.session.availability();
        for endpoint in [start, end] {
            if availability.is_blocked(endpoint) {
                println!("{endpoint} is blocked by a reservation.");
            }
        }
        if availability.crosses_reservation(start, end) {
            println!("{start} .. {end} crosses a reservation.");
        } else {
            println!("{start} .. {end} does not cross any reservation.");
        }
    }

    /// Renders a month availability grid.
    pub fn month(&self, month: Date) {
        let view = MonthView {
            month,
            today: self.today,
            availability: self.session.availability(),
            selection: self.session.selection(),
        };
        print!("{view}");
    }

    /// Feeds picks through the state machine and optionally commits.
    pub fn simulate(&mut self, picks: Vec<Date>, commit: bool) {
        for day in picks {
            let outcome = self.session.pick(day, self.today);
            println!("pick {day}: {}", describe(outcome));
        }
        println!(
            "Selection: {}",
            SelectionDisplay(self.session.selection())
        );
        if commit {
            let mut consumer = PrintingConsumer;
            self.session.commit(&mut consumer);
        }
    }
}

fn describe(outcome: PickOutcome) -> &'static str {
    match outcome {
        PickOutcome::Accepted => "accepted",
        PickOutcome::Rejected(RejectReason::Blocked) => "rejected (blocked)",
        PickOutcome::Rejected(RejectReason::Past) => "rejected (past)",
        PickOutcome::Restarted => "restarted selection",
    }
}

/// Prints commit callbacks the way a host application would receive them.
struct PrintingConsumer;

impl RangeConsumer for PrintingConsumer {
    fn on_set_date_range(&mut self, start: Date, end: Date) -> anyhow::Result<()> {
        println!("Date range set: {start} .. {end}");
        Ok(())
    }

    fn on_set_date_range_failed(&mut self, message: &str) -> anyhow::Result<()> {
        println!("Date range rejected: {message}");
        Ok(())
    }
}
