//! One graded review as plain data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Rating, ReviewState, sm2};

/// A single grading of a card, as reported by a client session.
///
/// Events are inputs to the scheduler; this crate does not store them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub card_id: i64,
    pub rating: Rating,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewEvent {
    pub fn new(card_id: i64, rating: Rating, reviewed_at: DateTime<Utc>) -> Self {
        Self {
            card_id,
            rating,
            reviewed_at,
        }
    }

    /// Runs the transition this event describes.
    pub fn apply(&self, state: &ReviewState) -> ReviewState {
        sm2::compute_next_state(state, self.rating, self.reviewed_at)
    }
}
