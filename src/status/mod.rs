//! Card Status Buckets
//!
//! Presentation-facing grouping derived from scheduling progress. This is
//! caller-side policy layered on top of `repetitions` and `interval_days`;
//! the scheduling math never reads a card's status.

use serde::{Deserialize, Serialize};

use crate::types::SchedulingState;

/// Interval at which a card counts as long-term retained, in days.
const MASTERY_MIN_INTERVAL_DAYS: u32 = 21;

/// Successful repetitions required before mastery.
const MASTERY_MIN_REPETITIONS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Learning,
    Familiar,
    Mastered,
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::Learning
    }
}

impl CardStatus {
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "FAMILIAR" => Self::Familiar,
            "MASTERED" => Self::Mastered,
            _ => Self::Learning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learning => "LEARNING",
            Self::Familiar => "FAMILIAR",
            Self::Mastered => "MASTERED",
        }
    }
}

/// Long-term mastery: three successful repetitions carried the interval
/// past three weeks.
pub fn is_mastered(state: &SchedulingState) -> bool {
    state.repetitions >= MASTERY_MIN_REPETITIONS
        && state.interval_days >= MASTERY_MIN_INTERVAL_DAYS
}

/// Bucket a card by its scheduling progress.
pub fn card_status(state: &SchedulingState) -> CardStatus {
    if is_mastered(state) {
        CardStatus::Mastered
    } else if state.repetitions >= 1 {
        CardStatus::Familiar
    } else {
        CardStatus::Learning
    }
}
