//! State Validation
//!
//! Input checks for the scheduling operations. Corrupt input is rejected,
//! not repaired: a clamped rating or a defaulted timestamp would silently
//! rewrite a card's learning trajectory.
//!
//! Checks:
//! - Quality rating range (0-5)
//! - Ease factor finiteness and floor
//! - Interval lower bound
//! - Timestamp usability and clock-skew tolerance
//! - `next_review` consistency with `last_reviewed + interval_days`

use chrono::DateTime;

use crate::types::{
    ScheduleError, SchedulingState, StateDiagnostics, MAX_QUALITY, MIN_EASE_FACTOR, MS_PER_DAY,
};

/// Tolerance for timestamps ahead of `now` (client clock skew).
const TIMESTAMP_FUTURE_LIMIT_MS: i64 = 60 * 60 * 1000;

/// Reject quality ratings outside the 0-5 scale.
pub fn validate_quality(quality: u8) -> Result<(), ScheduleError> {
    if quality > MAX_QUALITY {
        return Err(ScheduleError::InvalidQuality(quality));
    }
    Ok(())
}

/// Check an epoch-ms timestamp for usability relative to `now_ms`.
///
/// Rejects non-positive values, values outside the representable date
/// range, and values more than an hour ahead of `now_ms`.
pub fn validate_timestamp_ms(value: i64, now_ms: i64) -> Result<(), ScheduleError> {
    if value <= 0 {
        return Err(ScheduleError::InvalidTimestamp(value));
    }
    if DateTime::from_timestamp_millis(value).is_none() {
        return Err(ScheduleError::InvalidTimestamp(value));
    }
    if value > now_ms.saturating_add(TIMESTAMP_FUTURE_LIMIT_MS) {
        return Err(ScheduleError::InvalidTimestamp(value));
    }
    Ok(())
}

/// Reject non-finite ease factors, ease below the floor and zero
/// intervals.
///
/// The timestamp-free subset of [`validate_state`], for operations that
/// read only the numeric fields.
pub fn validate_ease_and_interval(state: &SchedulingState) -> Result<(), ScheduleError> {
    if !state.ease_factor.is_finite() {
        return Err(ScheduleError::InvalidState(format!(
            "ease factor is not finite: {}",
            state.ease_factor
        )));
    }
    if state.ease_factor < MIN_EASE_FACTOR {
        return Err(ScheduleError::InvalidState(format!(
            "ease factor {} below minimum {}",
            state.ease_factor, MIN_EASE_FACTOR
        )));
    }
    if state.interval_days == 0 {
        return Err(ScheduleError::InvalidState(
            "interval must be at least one day".to_string(),
        ));
    }
    Ok(())
}

/// Reject scheduling states that violate the state invariants.
pub fn validate_state(state: &SchedulingState, now_ms: i64) -> Result<(), ScheduleError> {
    validate_ease_and_interval(state)?;
    match state.last_reviewed {
        Some(last) => {
            validate_timestamp_ms(last, now_ms)?;
            if let Some(next) = state.next_review {
                let expected = expected_next_review(last, state.interval_days);
                if next != expected {
                    return Err(ScheduleError::InvalidState(format!(
                        "next review {} does not equal last review plus interval ({})",
                        next, expected
                    )));
                }
            }
        }
        None => {
            if state.next_review.is_some() {
                return Err(ScheduleError::InvalidState(
                    "next review set on a card that was never reviewed".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// Non-failing health report for a persisted state.
pub fn diagnose_state(state: &SchedulingState, now_ms: i64) -> StateDiagnostics {
    let ease_out_of_range =
        !state.ease_factor.is_finite() || state.ease_factor < MIN_EASE_FACTOR;
    let interval_out_of_range = state.interval_days == 0;
    let invalid_timestamp = match state.last_reviewed {
        Some(last) => validate_timestamp_ms(last, now_ms).is_err(),
        None => false,
    };
    let inconsistent_next_review = match (state.last_reviewed, state.next_review) {
        (Some(last), Some(next)) => next != expected_next_review(last, state.interval_days),
        (None, Some(_)) => true,
        _ => false,
    };

    let is_healthy = !ease_out_of_range
        && !interval_out_of_range
        && !invalid_timestamp
        && !inconsistent_next_review;

    let message = if is_healthy {
        "State is healthy".to_string()
    } else if ease_out_of_range {
        format!("Ease factor out of range: {}", state.ease_factor)
    } else if interval_out_of_range {
        "Interval below one day".to_string()
    } else if invalid_timestamp {
        "Last-review timestamp is unusable".to_string()
    } else {
        "Next review does not equal last review plus interval".to_string()
    };

    StateDiagnostics {
        is_healthy,
        ease_out_of_range,
        interval_out_of_range,
        invalid_timestamp,
        inconsistent_next_review,
        message,
    }
}

// Saturates: `diagnose_state` feeds it timestamps that have already
// failed the range check.
fn expected_next_review(last_reviewed_ms: i64, interval_days: u32) -> i64 {
    last_reviewed_ms.saturating_add(interval_days as i64 * MS_PER_DAY)
}
