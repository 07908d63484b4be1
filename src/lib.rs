//! # glossa-algo - Spaced repetition scheduling for language learning
//!
//! Pure Rust implementation of the review scheduling engine:
//!
//! - **SM-2 scheduling** - ease factors, interval progression, due dates
//! - **Review queue** - due filtering and priority ordering for sessions
//! - **Retention estimate** - display-only recall heuristic
//! - **Status buckets** - learning / familiar / mastered grouping
//!
//! Design:
//!
//! - **Pure functions** - no I/O and no clock reads; "now" is always a
//!   caller-supplied timestamp, so every result is reproducible in tests
//! - **Reusable** - no framework or binding dependencies
//! - **Strict input contract** - invalid ratings and corrupt states are
//!   rejected, never silently clamped
//!
//! Modules:
//!
//! - [`types`] - shared types and constants
//! - [`validate`] - input validation and state diagnostics
//! - [`sm2`] - review computation (ease, interval, repetitions, next due)
//! - [`queue`] - due checks and priority scoring
//! - [`retention`] - recall-probability estimate for display
//! - [`status`] - presentation-facing status bucketing
//!
//! Example:
//!
//! ```rust
//! use glossa_algo::{sm2_next_review, SchedulingState};
//!
//! let state = SchedulingState::default();
//! let now_ms = 1_700_000_000_000;
//! let outcome = sm2_next_review(&state, 4, now_ms).unwrap();
//! assert_eq!(outcome.state.repetitions, 1);
//! assert_eq!(outcome.state.interval_days, 1);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod types;
pub mod validate;
pub mod sm2;
pub mod queue;
pub mod retention;
pub mod status;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export all shared types and constants
pub use types::*;

/// Re-export the SM-2 review operations
pub use sm2::{sm2_next_review, sm2_preview_intervals};

/// Re-export the review queue operations
pub use queue::{build_review_queue, days_until_review, is_due_for_review, review_priority};

/// Re-export the retention estimate
pub use retention::retention_rate;

/// Re-export the status bucketing policy
pub use status::{card_status, is_mastered, CardStatus};

/// Re-export validation and diagnostics
pub use validate::{
    diagnose_state, validate_ease_and_interval, validate_quality, validate_state,
    validate_timestamp_ms,
};
