//! Retention Estimate
//!
//! Heuristic recall-probability estimate for display:
//!
//! retention = min(0.98, 0.85 + ease_term + interval_term)
//!   ease_term     = min(0.1, (ease - 2.0) * 0.05)
//!   interval_term = min(0.05, ln(interval + 1) * 0.01)
//!
//! Display-only: the review computation never reads this value, so the
//! estimate cannot feed back into scheduling.

/// Base retention assumed for an average card.
const BASE_RETENTION: f64 = 0.85;

/// Hard cap on the estimate.
const MAX_RETENTION: f64 = 0.98;

/// Ease value contributing zero to the estimate.
const NEUTRAL_EASE: f64 = 2.0;

/// Per-point weight of ease above neutral.
const EASE_WEIGHT: f64 = 0.05;

/// Cap on the ease contribution.
const MAX_EASE_TERM: f64 = 0.1;

/// Weight of logarithmic interval growth.
const INTERVAL_WEIGHT: f64 = 0.01;

/// Cap on the interval contribution.
const MAX_INTERVAL_TERM: f64 = 0.05;

/// Estimated probability of recalling a card at its scheduled review.
///
/// A non-finite `ease_factor` yields `f64::NAN`: the capped terms use
/// `f64::min`, which ignores NaN, so a corrupt ease would otherwise
/// read as a best-case estimate.
pub fn retention_rate(ease_factor: f64, interval_days: u32) -> f64 {
    if !ease_factor.is_finite() {
        return f64::NAN;
    }
    let ease_term = ((ease_factor - NEUTRAL_EASE) * EASE_WEIGHT).min(MAX_EASE_TERM);
    let interval_term =
        ((interval_days as f64 + 1.0).ln() * INTERVAL_WEIGHT).min(MAX_INTERVAL_TERM);
    (BASE_RETENTION + ease_term + interval_term).min(MAX_RETENTION)
}
