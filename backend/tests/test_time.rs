//! Tests for SearchClock

use settlement_planner_core_rs::SearchClock;
use std::time::Duration;

#[test]
fn test_clock_with_generous_budget_is_not_expired() {
    let clock = SearchClock::start(Some(Duration::from_secs(3600)));

    assert!(!clock.is_expired());
    assert!(clock.remaining().unwrap() > Duration::from_secs(3500));
}

#[test]
fn test_unbounded_clock_never_expires() {
    let clock = SearchClock::unbounded();

    std::thread::sleep(Duration::from_millis(5));
    assert!(!clock.is_expired());
    assert_eq!(clock.budget(), None);
    assert_eq!(clock.remaining(), None);
}

#[test]
fn test_clock_expires_after_budget() {
    let clock = SearchClock::start(Some(Duration::from_millis(1)));

    std::thread::sleep(Duration::from_millis(10));
    assert!(clock.is_expired());
    assert_eq!(clock.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_elapsed_is_monotonic() {
    let clock = SearchClock::unbounded();
    let first = clock.elapsed();
    std::thread::sleep(Duration::from_millis(2));

    assert!(clock.elapsed() > first);
}
