//! A card pairs question/answer content with its scheduling state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Rating, ReviewState, sm2};

/// A single fact under spaced repetition.
///
/// The question/answer text comes from the content-generation service;
/// the scheduler only ever reads the identity and the review state. The
/// state lives and dies with its card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub review: ReviewState,
}

impl Card {
    /// Creates a card with a fresh review state, due immediately.
    pub fn new(id: i64, question: String, answer: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            question,
            answer,
            review: ReviewState::new(created_at),
        }
    }

    /// True once the card should be re-presented to the learner.
    pub fn is_due(&self, at: DateTime<Utc>) -> bool {
        self.review.is_due(at)
    }

    /// Returns the card after one graded review; `self` is unchanged,
    /// the caller persists the replacement.
    pub fn grade(&self, rating: Rating, reviewed_at: DateTime<Utc>) -> Card {
        Card {
            review: sm2::compute_next_state(&self.review, rating, reviewed_at),
            ..self.clone()
        }
    }
}
