//! Per-card scheduling state consumed and produced by the SM-2 engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sm2;

/// Scheduling state of a single card.
///
/// This is an immutable value: every graded review produces a fresh
/// `ReviewState` and the previous one is left untouched. The state must
/// survive a serialize/deserialize round trip without any change, since
/// every client recomputes due dates from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Multiplier controlling how fast intervals grow. Never below 1.3.
    pub easiness_factor: f64,
    /// Whole days until the next review, as of the most recent grading.
    pub interval_days: u32,
    /// Consecutive successful reviews since the last lapse.
    pub repetitions: u32,
    /// The card is due once the current time reaches this instant.
    pub next_review_at: DateTime<Utc>,
    /// `None` until the card has been reviewed for the first time.
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// State of a brand-new card: default easiness, no history, due
    /// immediately. The caller supplies the creation instant.
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            easiness_factor: sm2::INITIAL_EASE_FACTOR,
            interval_days: 0,
            repetitions: 0,
            next_review_at: created_at,
            last_reviewed_at: None,
        }
    }

    /// True once the clock has reached the scheduled review instant.
    pub fn is_due(&self, at: DateTime<Utc>) -> bool {
        at >= self.next_review_at
    }
}
