//! Common Types and Constants
//!
//! Shared data structures used across the scheduling modules. All
//! timestamps are Unix epoch milliseconds; "now" is never read from the
//! wall clock, it is always supplied by the caller.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Floor for the ease factor; no review can push ease below this.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor assigned to a card that has never been reviewed.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Interval assigned to a freshly introduced card, in days.
pub const INITIAL_INTERVAL_DAYS: u32 = 1;

/// Highest valid quality rating on the 0-5 recall scale.
pub const MAX_QUALITY: u8 = 5;

/// Lowest quality rating that counts as a successful recall.
pub const PASSING_QUALITY: u8 = 3;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// ==================== Scheduling State ====================

/// Per-card scheduling state.
///
/// Created with [`Default`] when a card is introduced and mutated only by
/// recording a review. `next_review` is always derived from
/// `last_reviewed` plus `interval_days`; it is never set independently.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingState {
    /// Recall ease multiplier, never below [`MIN_EASE_FACTOR`]
    pub ease_factor: f64,
    /// Days until the next scheduled review
    pub interval_days: u32,
    /// Consecutive successful (quality >= 3) reviews; 0 after a lapse
    pub repetitions: u32,
    /// Epoch ms of the most recent review; `None` for a new card
    pub last_reviewed: Option<i64>,
    /// Epoch ms of the next scheduled review; `None` for a new card
    pub next_review: Option<i64>,
}

impl Default for SchedulingState {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE_FACTOR,
            interval_days: INITIAL_INTERVAL_DAYS,
            repetitions: 0,
            last_reviewed: None,
            next_review: None,
        }
    }
}

impl SchedulingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A card that has never been reviewed. New cards are always due.
    pub fn is_new(&self) -> bool {
        self.last_reviewed.is_none()
    }
}

/// Result of recording a review.
///
/// `state` is the authoritative next schedule for the caller to persist.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    /// Updated scheduling state, with `last_reviewed` set to the review time
    pub state: SchedulingState,
    /// Days until the next review (same as `state.interval_days`)
    pub interval_days: u32,
    /// Always `true`: marks the returned schedule as authoritative,
    /// not a live due-check
    pub due_for_review: bool,
}

// ==================== Review Queue Types ====================

/// A card presented to the queue builder.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCard {
    /// Caller-side card identifier
    pub card_id: String,
    /// Current scheduling state of the card
    pub state: SchedulingState,
}

/// One scored entry of a review queue.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    /// Caller-side card identifier
    pub card_id: String,
    /// Urgency score, higher first
    pub priority: f64,
    /// Days until the scheduled review; negative means overdue
    pub days_until_review: i64,
    /// Whether the scheduled review date has passed by at least a day
    pub overdue: bool,
}

// ==================== Diagnostics ====================

/// Health report for a persisted scheduling state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDiagnostics {
    /// Whether every check passed
    pub is_healthy: bool,
    /// Ease factor is non-finite or below the floor
    pub ease_out_of_range: bool,
    /// Interval is below one day
    pub interval_out_of_range: bool,
    /// Last-review timestamp is unusable
    pub invalid_timestamp: bool,
    /// `next_review` disagrees with `last_reviewed + interval_days`
    pub inconsistent_next_review: bool,
    /// Human-readable summary of the first failed check
    pub message: String,
}

// ==================== Errors ====================

/// Errors returned by the scheduling operations.
///
/// Invalid input is rejected, never clamped or defaulted: a silently
/// adjusted rating or timestamp would corrupt a card's learning history.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("quality rating out of range: {0} (expected 0-5)")]
    InvalidQuality(u8),
    #[error("invalid scheduling state: {0}")]
    InvalidState(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
