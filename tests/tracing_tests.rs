#![cfg(all(feature = "tracing", feature = "control"))]

//! Integration tests for the debug events emitted on rejection.
//!
//! `Burrito::guard`, `Outcome::ensure` and `Outcome::filter` report a
//! rejected value with a `DEBUG` event under the `burrito` target. Accepted
//! values and values that were already empty or failed stay silent.

use std::sync::{Arc, Mutex};

use burrito::Burrito;
use burrito::control::Outcome;
use rstest::rstest;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// Layer that records the target and level of every event it sees.
#[derive(Clone, Default)]
struct RecordedEvents {
    events: Arc<Mutex<Vec<(String, Level)>>>,
}

impl RecordedEvents {
    fn snapshot(&self) -> Vec<(String, Level)> {
        self.events.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for RecordedEvents {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let metadata = event.metadata();
        self.events
            .lock()
            .unwrap()
            .push((metadata.target().to_string(), *metadata.level()));
    }
}

fn record<T>(body: impl FnOnce() -> T) -> (T, Vec<(String, Level)>) {
    let recorded = RecordedEvents::default();
    let subscriber = tracing_subscriber::registry().with(recorded.clone());
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, recorded.snapshot())
}

fn rejection() -> Vec<(String, Level)> {
    vec![("burrito".to_string(), Level::DEBUG)]
}

// =============================================================================
// Burrito::guard
// =============================================================================

#[rstest]
fn test_guard_rejection_emits_debug_event() {
    let (guarded, events) = record(|| Burrito::guard(3, |n| n % 2 == 0));
    assert!(guarded.is_empty());
    assert_eq!(events, rejection());
}

#[rstest]
fn test_guard_acceptance_is_silent() {
    let (guarded, events) = record(|| Burrito::guard(4, |n| n % 2 == 0));
    assert_eq!(guarded.len(), 1);
    assert!(events.is_empty());
}

// =============================================================================
// Outcome::ensure / Outcome::filter
// =============================================================================

#[rstest]
fn test_ensure_rejection_emits_debug_event() {
    let (outcome, events) =
        record(|| Outcome::<i32, &str>::ensure(-1, |n| *n >= 0, "negative"));
    assert_eq!(outcome, Outcome::Failure("negative"));
    assert_eq!(events, rejection());
}

#[rstest]
fn test_filter_rejection_emits_debug_event() {
    let (outcome, events) = record(|| Outcome::<i32, &str>::Success(2).filter(|n| *n > 5));
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(events, rejection());
}

#[rstest]
#[case(Outcome::Success(9))]
#[case(Outcome::Empty)]
#[case(Outcome::Failure("burnt"))]
fn test_filter_without_rejection_is_silent(#[case] input: Outcome<i32, &'static str>) {
    let (outcome, events) = record(|| input.filter(|n| *n > 5));
    assert_eq!(outcome, input);
    assert!(events.is_empty());
}
