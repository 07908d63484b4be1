//! Review Queue
//!
//! Due-checks, overdue accounting and priority scoring for ordering a
//! review session. Priority (higher = more urgent):
//!
//! - overdue by d days: d * 10
//! - due within one day: 5
//! - due in d > 1 days: max(1, 5 - d)
//!
//! All functions are pure comparisons over caller-supplied timestamps;
//! the queue builder never touches storage.

use crate::types::{QueueEntry, ReviewCard, MS_PER_DAY};

/// Weight applied to each overdue day.
const OVERDUE_DAY_WEIGHT: f64 = 10.0;

/// Priority of a card due within one day.
const DUE_SOON_PRIORITY: f64 = 5.0;

/// Lowest priority assigned to a card scheduled further out.
const MIN_PRIORITY: f64 = 1.0;

/// Whether a card's scheduled review time has arrived.
///
/// A card with no `last_reviewed` has never been reviewed and is always
/// due.
pub fn is_due_for_review(last_reviewed: Option<i64>, interval_days: u32, now_ms: i64) -> bool {
    match last_reviewed {
        Some(last) => now_ms >= last + interval_days as i64 * MS_PER_DAY,
        None => true,
    }
}

/// Whole days until the scheduled review, rounded up.
///
/// Zero means due today, negative values count days overdue. A card that
/// was never reviewed is due now and returns 0.
pub fn days_until_review(last_reviewed: Option<i64>, interval_days: u32, now_ms: i64) -> i64 {
    let Some(last) = last_reviewed else {
        return 0;
    };
    let remaining_ms = last + interval_days as i64 * MS_PER_DAY - now_ms;
    (remaining_ms as f64 / MS_PER_DAY as f64).ceil() as i64
}

/// Urgency score for ordering a review queue, higher first.
///
/// `_ease_factor` is part of the signature for callers that track it,
/// but the current formula does not weight by it.
pub fn review_priority(
    last_reviewed: Option<i64>,
    interval_days: u32,
    _ease_factor: f64,
    now_ms: i64,
) -> f64 {
    let days_until = days_until_review(last_reviewed, interval_days, now_ms);
    if days_until <= 0 {
        days_until.abs() as f64 * OVERDUE_DAY_WEIGHT
    } else if days_until <= 1 {
        DUE_SOON_PRIORITY
    } else {
        (DUE_SOON_PRIORITY - days_until as f64).max(MIN_PRIORITY)
    }
}

/// Filter a collection down to its due cards, scored and ordered by
/// descending priority. `limit` caps the session length when set.
pub fn build_review_queue(
    cards: &[ReviewCard],
    now_ms: i64,
    limit: Option<usize>,
) -> Vec<QueueEntry> {
    let mut entries: Vec<QueueEntry> = cards
        .iter()
        .filter(|card| {
            is_due_for_review(card.state.last_reviewed, card.state.interval_days, now_ms)
        })
        .map(|card| {
            let days_until =
                days_until_review(card.state.last_reviewed, card.state.interval_days, now_ms);
            QueueEntry {
                card_id: card.card_id.clone(),
                priority: review_priority(
                    card.state.last_reviewed,
                    card.state.interval_days,
                    card.state.ease_factor,
                    now_ms,
                ),
                days_until_review: days_until,
                overdue: days_until < 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}
