//! SM-2 (SuperMemo 2) spaced repetition scheduling.
//!
//! The SM-2 algorithm computes review intervals from recall quality:
//! - Each card carries an easiness factor (EF) revised after every review
//! - Ratings below 3 are lapses and restart the card at a 1 day interval
//! - Ratings 3-5 grow the interval progressively (1 day, 6 days, then
//!   the previous interval times EF)
//! - EF has a hard floor of 1.3 and no ceiling
//!
//! Everything here is a pure function of its arguments: no clock reads,
//! no mutation of the input state. Identical inputs give identical
//! outputs, which is what lets the web app, the browser extension, and
//! the desktop client agree on due dates without sharing any state.

use chrono::{DateTime, Duration, Utc};

use super::{Rating, ReviewState};

/// Easiness factor assigned to a never-reviewed card.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;
/// The easiness factor never drops below this, however badly reviews go.
pub const MIN_EASE_FACTOR: f64 = 1.3;
/// Interval after the first successful review, and after any lapse.
pub const FIRST_INTERVAL_DAYS: u32 = 1;
/// Interval after the second consecutive successful review.
pub const SECOND_INTERVAL_DAYS: u32 = 6;

/// Computes the state a card moves to after one graded review.
///
/// `reviewed_at` is supplied by the caller, normally `Utc::now()`. A
/// backdated instant is accepted so review history can be backfilled;
/// the new due date is always derived from the supplied instant.
pub fn compute_next_state(
    state: &ReviewState,
    rating: Rating,
    reviewed_at: DateTime<Utc>,
) -> ReviewState {
    let (interval_days, repetitions) = if rating.is_lapse() {
        // Forgotten: restart the repetition ladder the next day.
        (FIRST_INTERVAL_DAYS, 0)
    } else {
        let interval_days = match state.repetitions {
            0 => FIRST_INTERVAL_DAYS,
            1 => SECOND_INTERVAL_DAYS,
            // Growth uses the easiness in effect before this review.
            _ => (state.interval_days as f64 * state.easiness_factor).round() as u32,
        };
        (interval_days, state.repetitions + 1)
    };

    // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at
    // 1.3. A lapse still revises easiness downward.
    let q = rating.value() as f64;
    let easiness_factor = (state.easiness_factor
        + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)))
        .max(MIN_EASE_FACTOR);

    let next = ReviewState {
        easiness_factor,
        interval_days,
        repetitions,
        next_review_at: reviewed_at + Duration::days(interval_days as i64),
        last_reviewed_at: Some(reviewed_at),
    };

    log::trace!(
        "rated {:?}: interval {}d -> {}d, ease {:.2} -> {:.2}",
        rating,
        state.interval_days,
        next.interval_days,
        state.easiness_factor,
        next.easiness_factor,
    );

    next
}

/// Projected outcome of one candidate rating.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub state: ReviewState,
    pub due_at: DateTime<Utc>,
}

/// Projected outcomes for all six ratings.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewPreview {
    outcomes: [Projection; 6],
}

impl ReviewPreview {
    /// The outcome the given rating would commit.
    pub fn outcome(&self, rating: Rating) -> &Projection {
        &self.outcomes[rating.value() as usize]
    }

    /// Outcomes paired with their ratings, in ascending rating order.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, &Projection)> + '_ {
        Rating::ALL.into_iter().zip(self.outcomes.iter())
    }
}

/// Projects every possible rating for a card without committing any.
///
/// Each projection comes from [`compute_next_state`] itself, so the
/// intervals a client shows next to its rating buttons are exactly what
/// committing that rating would store.
pub fn preview_intervals(state: &ReviewState, now: DateTime<Utc>) -> ReviewPreview {
    let outcomes = Rating::ALL.map(|rating| {
        let projected = compute_next_state(state, rating, now);
        Projection {
            due_at: projected.next_review_at,
            state: projected,
        }
    });

    ReviewPreview { outcomes }
}
