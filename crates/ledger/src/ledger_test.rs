//! Tests for Ledger

use std::sync::Arc;
use std::thread;

use super::*;

// ============================================================================
// Recording
// ============================================================================

#[test]
fn test_new_ledger_is_zero() {
    let ledger = Ledger::new();
    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.total_taps, 0);
    assert_eq!(snapshot.active_users, 0);
    assert!(snapshot.countries.is_empty());
}

#[test]
fn test_record_tap_returns_updated_totals() {
    let ledger = Ledger::new();

    let first = ledger.record_tap("US");
    assert_eq!(first.country_total, 1);
    assert_eq!(first.global_total, 1);

    let second = ledger.record_tap("US");
    assert_eq!(second.country_total, 2);
    assert_eq!(second.global_total, 2);

    let other = ledger.record_tap("KR");
    assert_eq!(other.country_total, 1);
    assert_eq!(other.global_total, 3);
}

#[test]
fn test_concurrent_taps_lose_nothing() {
    let ledger = Arc::new(Ledger::new());
    let threads: u64 = 8;
    let taps_per_thread: u64 = 1000;

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            let code = if i % 2 == 0 { "US" } else { "KR" };
            thread::spawn(move || {
                for _ in 0..taps_per_thread {
                    ledger.record_tap(code);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.total_taps, threads * taps_per_thread);

    let sum: u64 = snapshot.countries.iter().map(|(_, count)| count).sum();
    assert_eq!(sum, snapshot.total_taps);
}

#[test]
fn test_snapshot_is_a_copy() {
    let ledger = Ledger::new();
    ledger.record_tap("US");

    let snapshot = ledger.snapshot();
    ledger.record_tap("US");

    // Earlier snapshot unaffected by later mutation
    assert_eq!(snapshot.total_taps, 1);
    assert_eq!(snapshot.country("US"), Some(1));
    assert_eq!(ledger.total_taps(), 2);
}

// ============================================================================
// Country stats
// ============================================================================

#[test]
fn test_country_stats_percentage() {
    let ledger = Ledger::new();
    for _ in 0..3 {
        ledger.record_tap("US");
    }
    ledger.record_tap("KR");

    let stats = ledger.country_stats("US");
    assert_eq!(stats.country, "US");
    assert_eq!(stats.total, 3);
    assert!((stats.percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_country_stats_unknown_code() {
    let ledger = Ledger::new();
    ledger.record_tap("US");

    let stats = ledger.country_stats("ZZ");
    assert_eq!(stats.total, 0);
    assert_eq!(stats.percentage, 0.0);
}

#[test]
fn test_country_stats_empty_ledger() {
    let ledger = Ledger::new();
    let stats = ledger.country_stats("US");
    assert_eq!(stats.total, 0);
    // Division guard: no taps at all means 0, not NaN
    assert_eq!(stats.percentage, 0.0);
}

// ============================================================================
// Leaderboard
// ============================================================================

#[test]
fn test_leaderboard_sorted_descending() {
    let ledger = Ledger::new();
    for _ in 0..2 {
        ledger.record_tap("KR");
    }
    for _ in 0..5 {
        ledger.record_tap("US");
    }
    ledger.record_tap("JP");

    let board = ledger.leaderboard(10);
    let order: Vec<&str> = board.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(order, vec!["US", "KR", "JP"]);
    assert_eq!(board[0].count, 5);
    assert!((board[0].percentage - 62.5).abs() < f64::EPSILON);
}

#[test]
fn test_leaderboard_ties_keep_first_seen_order() {
    let ledger = Ledger::new();
    ledger.record_tap("KR");
    ledger.record_tap("US");
    ledger.record_tap("JP");

    let board = ledger.leaderboard(10);
    let order: Vec<&str> = board.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(order, vec!["KR", "US", "JP"]);
}

#[test]
fn test_leaderboard_truncated_to_limit() {
    let ledger = Ledger::new();
    for code in ["AA", "BB", "CC", "DD", "EE"] {
        ledger.record_tap(code);
    }

    let board = ledger.leaderboard(3);
    assert_eq!(board.len(), 3);
}

#[test]
fn test_leaderboard_empty_ledger() {
    let ledger = Ledger::new();
    assert!(ledger.leaderboard(10).is_empty());
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_snapshot_wire_shape() {
    let ledger = Ledger::new();
    ledger.record_tap("US");
    ledger.record_tap("US");
    ledger.record_tap("KR");

    let json = serde_json::to_value(ledger.snapshot()).unwrap();
    assert_eq!(json["totalTaps"], 3);
    assert_eq!(json["activeUsers"], 0);
    assert_eq!(json["countries"]["US"], 2);
    assert_eq!(json["countries"]["KR"], 1);
}

#[test]
fn test_active_users_is_inert_but_exposed() {
    let ledger = Ledger::new();
    ledger.set_active_users(7);
    assert_eq!(ledger.snapshot().active_users, 7);

    ledger.record_tap("US");
    // Recording taps never touches it
    assert_eq!(ledger.snapshot().active_users, 7);

    ledger.set_active_users(0);
    assert_eq!(ledger.snapshot().active_users, 0);
}
