//! SM-2 Scheduling
//!
//! SuperMemo-2 interval progression for a card under repeated review:
//!
//! - ease update, quality q in 0..=5:
//!   - q >= 3: ease' = max(1.3, ease + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)))
//!   - q <  3: ease' = max(1.3, ease - 0.2)
//! - interval: 1 day after the first success, 6 days after the second,
//!   then round(interval * ease'); a lapse (q < 3) restarts at 1 day
//!   and resets the repetition counter
//!
//! The review time is supplied by the caller as epoch milliseconds, so
//! results are fully deterministic.

use crate::types::{
    ReviewOutcome, ScheduleError, SchedulingState, MAX_QUALITY, MIN_EASE_FACTOR, MS_PER_DAY,
    PASSING_QUALITY,
};
use crate::validate::{validate_ease_and_interval, validate_quality, validate_state};

/// Interval after the first qualifying review, in days.
const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval after the second qualifying review, in days.
const SECOND_INTERVAL_DAYS: u32 = 6;

/// Ease penalty applied on a lapse.
const LAPSE_EASE_PENALTY: f64 = 0.2;

/// Record a review and compute the card's next schedule.
///
/// `quality` is the 0-5 recall self-assessment; ratings below 3 are
/// lapses. Out-of-range ratings and corrupt states are rejected, never
/// clamped. `now_ms` anchors `last_reviewed` and `next_review`.
pub fn sm2_next_review(
    state: &SchedulingState,
    quality: u8,
    now_ms: i64,
) -> Result<ReviewOutcome, ScheduleError> {
    validate_quality(quality)?;
    validate_state(state, now_ms)?;

    let new_ease = next_ease_factor(state.ease_factor, quality);

    let (new_repetitions, new_interval) = if quality < PASSING_QUALITY {
        // Lapse: back to the learning phase, review again tomorrow.
        (0, FIRST_INTERVAL_DAYS)
    } else {
        let repetitions = state.repetitions + 1;
        (
            repetitions,
            next_interval(repetitions, state.interval_days, new_ease),
        )
    };

    let next_review = now_ms + new_interval as i64 * MS_PER_DAY;

    Ok(ReviewOutcome {
        state: SchedulingState {
            ease_factor: new_ease,
            interval_days: new_interval,
            repetitions: new_repetitions,
            last_reviewed: Some(now_ms),
            next_review: Some(next_review),
        },
        interval_days: new_interval,
        due_for_review: true,
    })
}

/// Interval each quality rating 0..=5 would produce from `state`,
/// without recording a review. Index equals the rating.
///
/// Rejects states whose ease or interval is out of range, as the review
/// operation does; timestamps are not read. Lets a UI label its answer
/// buttons ("Forgot: 1d, Perfect: 16d").
pub fn sm2_preview_intervals(state: &SchedulingState) -> Result<[u32; 6], ScheduleError> {
    validate_ease_and_interval(state)?;
    let mut intervals = [0u32; 6];
    for quality in 0..=MAX_QUALITY {
        intervals[quality as usize] = if quality < PASSING_QUALITY {
            FIRST_INTERVAL_DAYS
        } else {
            let new_ease = next_ease_factor(state.ease_factor, quality);
            next_interval(state.repetitions + 1, state.interval_days, new_ease)
        };
    }
    Ok(intervals)
}

fn next_ease_factor(ease: f64, quality: u8) -> f64 {
    if quality >= PASSING_QUALITY {
        let miss = (MAX_QUALITY - quality) as f64;
        (ease + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR)
    } else {
        (ease - LAPSE_EASE_PENALTY).max(MIN_EASE_FACTOR)
    }
}

fn next_interval(new_repetitions: u32, old_interval: u32, new_ease: f64) -> u32 {
    match new_repetitions {
        1 => FIRST_INTERVAL_DAYS,
        2 => SECOND_INTERVAL_DAYS,
        _ => (old_interval as f64 * new_ease).round() as u32,
    }
}
