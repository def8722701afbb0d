//! Integration tests for the session: reload protocol, error state, and
//! the per-day query surface over a loaded snapshot.

mod common;

use common::{FailingSource, RecordingConsumer, StaticSource};
use jiff::civil::{date, Date};
use vacancy_core::{
    CommitOutcome, LoadReport, PickOutcome, RawInterval, ReloadOutcome, Session, VacancyError,
};

fn today() -> Date {
    date(2024, 5, 1)
}

fn booking_entries() -> Vec<RawInterval> {
    vec![
        RawInterval::span("2024-05-10", "2024-05-12"),
        RawInterval::span("2024-05-20 14:00:00", "2024-05-22 10:00:00"),
    ]
}

#[tokio::test]
async fn test_reload_applies_snapshot() {
    let mut session = Session::new();
    let source = StaticSource::new(booking_entries());

    let outcome = session.reload(&source, today()).await;

    assert_eq!(
        outcome,
        ReloadOutcome::Applied(LoadReport {
            accepted: 2,
            dropped: 0
        })
    );
    assert!(!session.is_loading());
    assert_eq!(session.error(), None);
    assert_eq!(session.intervals().len(), 2);
    assert!(session.is_blocked(date(2024, 5, 11)));
    assert!(session.is_blocked(date(2024, 5, 20)));
    assert!(!session.is_blocked(date(2024, 5, 13)));
}

#[tokio::test]
async fn test_reload_drops_malformed_entries() {
    let mut session = Session::new();
    let mut entries = booking_entries();
    entries.push(RawInterval {
        start: Some("whenever".to_string()),
        end: None,
        label: None,
        color: None,
        blocking: true,
    });
    let source = StaticSource::new(entries);

    let outcome = session.reload(&source, today()).await;

    assert_eq!(
        outcome,
        ReloadOutcome::Applied(LoadReport {
            accepted: 2,
            dropped: 1
        })
    );
    assert_eq!(session.intervals().len(), 2);
}

#[tokio::test]
async fn test_failed_reload_sets_visible_error_state() {
    let mut session = Session::new();

    let outcome = session.reload(&FailingSource, today()).await;

    assert!(matches!(outcome, ReloadOutcome::Failed(_)));
    assert!(!session.is_loading());
    assert!(session.error().unwrap().contains("endpoint unreachable"));

    // The session stays usable and the next successful reload clears the
    // error.
    let source = StaticSource::new(booking_entries());
    session.reload(&source, today()).await;
    assert_eq!(session.error(), None);
}

#[test]
fn test_latest_reload_wins() {
    let mut session = Session::new();

    let stale = session.begin_reload(date(2024, 5, 1));
    let fresh = session.begin_reload(date(2024, 6, 1));
    assert!(session.is_loading());

    // The stale response arrives after the newer request was issued and
    // must be discarded.
    let stale_outcome = session.complete_reload(stale, Ok(booking_entries()));
    assert_eq!(stale_outcome, ReloadOutcome::Superseded);
    assert!(session.is_loading());
    assert!(session.intervals().is_empty());

    let fresh_outcome = session.complete_reload(fresh, Ok(booking_entries()));
    assert!(matches!(fresh_outcome, ReloadOutcome::Applied(_)));
    assert!(!session.is_loading());
    assert_eq!(session.intervals().len(), 2);
}

#[test]
fn test_stale_failure_does_not_clobber_fresh_snapshot() {
    let mut session = Session::new();

    let stale = session.begin_reload(date(2024, 5, 1));
    let fresh = session.begin_reload(date(2024, 6, 1));

    session.complete_reload(fresh, Ok(booking_entries()));
    let outcome = session.complete_reload(
        stale,
        Err(VacancyError::Fetch {
            message: "too slow".to_string(),
        }),
    );

    assert_eq!(outcome, ReloadOutcome::Superseded);
    assert_eq!(session.error(), None);
    assert_eq!(session.intervals().len(), 2);
}

#[test]
fn test_reload_ticket_carries_collaborator_window() {
    let mut session = Session::new();
    let ticket = session.begin_reload(date(2024, 5, 15));

    assert_eq!(ticket.window().start_param(), "2024-05-01");
    assert_eq!(ticket.window().end_param(), "2024-07-01");
}

#[tokio::test]
async fn test_pick_and_commit_through_session() {
    let mut session = Session::new();
    let source = StaticSource::new(booking_entries());
    session.reload(&source, today()).await;

    assert_eq!(
        session.pick(date(2024, 5, 2), today()),
        PickOutcome::Accepted
    );
    assert_eq!(
        session.pick(date(2024, 5, 8), today()),
        PickOutcome::Accepted
    );

    let mut consumer = RecordingConsumer::default();
    assert_eq!(session.commit(&mut consumer), CommitOutcome::Committed);
    assert_eq!(
        consumer.accepted,
        vec![(date(2024, 5, 2), date(2024, 5, 8))]
    );

    // A committed selection is cleared for the next range.
    assert!(session.selection().start().is_none());
}

#[tokio::test]
async fn test_incomplete_commit_reports_failure_and_keeps_selection() {
    let mut session = Session::new();
    let source = StaticSource::new(booking_entries());
    session.reload(&source, today()).await;

    session.pick(date(2024, 5, 2), today());

    let mut consumer = RecordingConsumer::default();
    assert_eq!(session.commit(&mut consumer), CommitOutcome::Incomplete);
    assert_eq!(consumer.rejected, vec!["please select date range!".to_string()]);
    assert_eq!(session.selection().start(), Some(date(2024, 5, 2)));
}

#[tokio::test]
async fn test_query_surface_tracks_open_selection() {
    let mut session = Session::new();
    let source = StaticSource::new(booking_entries());
    session.reload(&source, today()).await;

    session.pick(date(2024, 5, 2), today());

    assert_eq!(
        session.closest_boundary_after(date(2024, 5, 2)),
        Some(date(2024, 5, 10))
    );
    assert!(!session.is_outside_range(date(2024, 5, 10), today()));
    assert!(session.is_outside_range(date(2024, 5, 11), today()));
    assert!(session.is_outside_range(date(2024, 4, 20), today()));
}
