//! Property-Based Tests for the scheduling engine
//!
//! Tests the following invariants:
//! - Ease factor never drops below 1.3 for any valid review
//! - A lapse (quality < 3) resets repetitions to 0 and the interval to 1 day
//! - Successful reviews follow the 1 / 6 / round(interval * ease) progression
//! - Review outcomes are internally consistent and revalidate cleanly
//! - Due-check, days-until and priority agree with each other
//! - The queue builder returns only due cards in descending priority order

use proptest::prelude::*;

use glossa_algo::types::{ReviewCard, SchedulingState, MIN_EASE_FACTOR, MS_PER_DAY};
use glossa_algo::{
    build_review_queue, days_until_review, is_due_for_review, retention_rate, review_priority,
    sm2_next_review, validate_state, ScheduleError,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_ease_factor() -> impl Strategy<Value = f64> {
    (1300u64..=3200u64).prop_map(|v| v as f64 / 1000.0)
}

fn arb_interval_days() -> impl Strategy<Value = u32> {
    1u32..=3650
}

fn arb_repetitions() -> impl Strategy<Value = u32> {
    0u32..=60
}

fn arb_quality() -> impl Strategy<Value = u8> {
    0u8..=5
}

fn arb_now_ms() -> impl Strategy<Value = i64> {
    1_000_000_000_000i64..=2_000_000_000_000i64
}

fn make_state(
    ease_factor: f64,
    interval_days: u32,
    repetitions: u32,
    elapsed_days: Option<i64>,
    now_ms: i64,
) -> SchedulingState {
    match elapsed_days {
        Some(days) => {
            let last = now_ms - days * MS_PER_DAY;
            SchedulingState {
                ease_factor,
                interval_days,
                repetitions,
                last_reviewed: Some(last),
                next_review: Some(last + interval_days as i64 * MS_PER_DAY),
            }
        }
        None => SchedulingState {
            ease_factor,
            interval_days,
            repetitions,
            last_reviewed: None,
            next_review: None,
        },
    }
}

fn arb_state_and_now() -> impl Strategy<Value = (SchedulingState, i64)> {
    (
        arb_ease_factor(),
        arb_interval_days(),
        arb_repetitions(),
        proptest::option::of(0i64..=400), // days since the last review
        arb_now_ms(),
    )
        .prop_map(|(ease_factor, interval_days, repetitions, elapsed_days, now_ms)| {
            (
                make_state(ease_factor, interval_days, repetitions, elapsed_days, now_ms),
                now_ms,
            )
        })
}

fn arb_deck() -> impl Strategy<Value = (Vec<ReviewCard>, i64)> {
    (
        arb_now_ms(),
        prop::collection::vec(
            (
                arb_ease_factor(),
                arb_interval_days(),
                proptest::option::of(0i64..=400),
            ),
            0..40,
        ),
    )
        .prop_map(|(now_ms, seeds)| {
            let cards = seeds
                .into_iter()
                .enumerate()
                .map(|(i, (ease_factor, interval_days, elapsed_days))| ReviewCard {
                    card_id: format!("card-{i}"),
                    state: make_state(ease_factor, interval_days, 2, elapsed_days, now_ms),
                })
                .collect();
            (cards, now_ms)
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// PBT-1: Ease factor stays at or above the floor for every valid review
    #[test]
    fn ease_factor_never_below_floor(
        (state, now_ms) in arb_state_and_now(),
        quality in arb_quality(),
    ) {
        let outcome = sm2_next_review(&state, quality, now_ms).unwrap();
        prop_assert!(outcome.state.ease_factor >= MIN_EASE_FACTOR);
    }

    /// PBT-2: A lapse resets repetitions to 0 and the interval to one day
    #[test]
    fn lapse_resets_progress(
        (state, now_ms) in arb_state_and_now(),
        quality in 0u8..=2,
    ) {
        let outcome = sm2_next_review(&state, quality, now_ms).unwrap();
        prop_assert_eq!(outcome.state.repetitions, 0);
        prop_assert_eq!(outcome.state.interval_days, 1);
    }

    /// PBT-3: Successful reviews follow the 1 / 6 / round(interval * ease)
    /// progression
    #[test]
    fn success_follows_interval_progression(
        (state, now_ms) in arb_state_and_now(),
        quality in 3u8..=5,
    ) {
        let outcome = sm2_next_review(&state, quality, now_ms).unwrap();
        prop_assert_eq!(outcome.state.repetitions, state.repetitions + 1);

        let expected = match outcome.state.repetitions {
            1 => 1,
            2 => 6,
            _ => (state.interval_days as f64 * outcome.state.ease_factor).round() as u32,
        };
        prop_assert_eq!(outcome.state.interval_days, expected);
        prop_assert!(outcome.state.interval_days >= 1);
    }

    /// PBT-4: Outcomes anchor timestamps to the review time and revalidate
    #[test]
    fn outcome_is_consistent(
        (state, now_ms) in arb_state_and_now(),
        quality in arb_quality(),
    ) {
        let outcome = sm2_next_review(&state, quality, now_ms).unwrap();
        prop_assert_eq!(outcome.state.last_reviewed, Some(now_ms));
        prop_assert_eq!(
            outcome.state.next_review,
            Some(now_ms + outcome.state.interval_days as i64 * MS_PER_DAY)
        );
        prop_assert_eq!(outcome.interval_days, outcome.state.interval_days);
        prop_assert!(outcome.due_for_review);
        prop_assert!(validate_state(&outcome.state, now_ms).is_ok());
    }

    /// PBT-5: Due-check matches the raw timestamp comparison
    #[test]
    fn due_check_matches_comparison(
        last in 1_000_000_000_000i64..=2_000_000_000_000i64,
        interval_days in 1u32..=3650,
        now_ms in 1_000_000_000_000i64..=2_000_000_000_000i64,
    ) {
        let due = is_due_for_review(Some(last), interval_days, now_ms);
        prop_assert_eq!(due, now_ms >= last + interval_days as i64 * MS_PER_DAY);
    }

    /// PBT-6: days_until_review is zero or negative exactly when due
    #[test]
    fn days_until_sign_matches_due(
        last in 1_000_000_000_000i64..=2_000_000_000_000i64,
        interval_days in 1u32..=3650,
        now_ms in 1_000_000_000_000i64..=2_000_000_000_000i64,
    ) {
        let due = is_due_for_review(Some(last), interval_days, now_ms);
        let days = days_until_review(Some(last), interval_days, now_ms);
        prop_assert_eq!(days <= 0, due);
    }

    /// PBT-7: A card overdue by at least a day outranks any upcoming card
    #[test]
    fn overdue_outranks_upcoming(
        now_ms in arb_now_ms(),
        interval_days in 1u32..=365,
        overdue_days in 1i64..=120,
        ahead_days in 1i64..=120,
    ) {
        let ahead_days = ahead_days.min(interval_days as i64);
        let overdue_last = now_ms - (interval_days as i64 + overdue_days) * MS_PER_DAY;
        let upcoming_last = now_ms - (interval_days as i64 - ahead_days) * MS_PER_DAY;
        prop_assert_eq!(days_until_review(Some(upcoming_last), interval_days, now_ms), ahead_days);

        let overdue_priority = review_priority(Some(overdue_last), interval_days, 2.5, now_ms);
        let upcoming_priority = review_priority(Some(upcoming_last), interval_days, 2.5, now_ms);
        prop_assert!(overdue_priority > upcoming_priority);
    }

    /// PBT-8: Retention estimate stays within its documented bounds
    #[test]
    fn retention_within_bounds(
        ease in arb_ease_factor(),
        interval_days in 1u32..=3650,
    ) {
        let rate = retention_rate(ease, interval_days);
        prop_assert!(rate > 0.8);
        prop_assert!(rate <= 0.98);
    }

    /// PBT-9: Out-of-range quality ratings are rejected, never clamped
    #[test]
    fn out_of_range_quality_rejected(
        (state, now_ms) in arb_state_and_now(),
        quality in 6u8..=255,
    ) {
        let result = sm2_next_review(&state, quality, now_ms);
        prop_assert!(matches!(result, Err(ScheduleError::InvalidQuality(q)) if q == quality));
    }

    /// PBT-10: The queue holds only due cards, sorted by descending priority
    #[test]
    fn queue_is_sorted_and_due((cards, now_ms) in arb_deck()) {
        let queue = build_review_queue(&cards, now_ms, None);
        prop_assert!(queue.len() <= cards.len());

        for pair in queue.windows(2) {
            prop_assert!(pair[0].priority >= pair[1].priority);
        }
        for entry in &queue {
            let card = cards.iter().find(|c| c.card_id == entry.card_id).unwrap();
            prop_assert!(is_due_for_review(
                card.state.last_reviewed,
                card.state.interval_days,
                now_ms
            ));
        }

        let capped = build_review_queue(&cards, now_ms, Some(5));
        prop_assert!(capped.len() <= 5);
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn review_on_march_first_is_due_march_seventh() {
    use chrono::{TimeZone, Utc};

    let reviewed = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .unwrap()
        .timestamp_millis();
    let due_day = Utc
        .with_ymd_and_hms(2024, 3, 7, 9, 0, 0)
        .unwrap()
        .timestamp_millis();

    assert!(is_due_for_review(Some(reviewed), 6, due_day));
    assert!(!is_due_for_review(Some(reviewed), 6, due_day - 1));
    assert_eq!(days_until_review(Some(reviewed), 6, due_day), 0);
}

#[test]
fn outcome_serializes_for_the_service_boundary() {
    let outcome = sm2_next_review(&SchedulingState::default(), 5, 1_700_000_000_000).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["dueForReview"], serde_json::json!(true));
    assert_eq!(json["intervalDays"], serde_json::json!(1));
    assert_eq!(json["state"]["repetitions"], serde_json::json!(1));
    assert!(json["state"]["lastReviewed"].is_i64());

    let restored: SchedulingState = serde_json::from_value(json["state"].clone()).unwrap();
    assert_eq!(restored.repetitions, 1);
    assert_eq!(restored.last_reviewed, Some(1_700_000_000_000));
}
