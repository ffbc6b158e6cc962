//! Recall quality ratings on the classic 0-5 scale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a raw quality value falls outside the 0-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rating {0}: expected a value from 0 to 5")]
pub struct InvalidRating(pub u8);

/// Learner's self-reported recall quality for a single review.
///
/// Anything below [`Rating::Hard`] counts as a lapse: the card was
/// forgotten and its repetition ladder restarts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Complete blackout, no recall at all.
    Blackout = 0,
    /// Incorrect, but the answer was remembered once revealed.
    Incorrect = 1,
    /// Incorrect, though the answer felt easy in hindsight.
    Familiar = 2,
    /// Correct, with serious difficulty.
    Hard = 3,
    /// Correct, after some hesitation.
    Good = 4,
    /// Perfect, effortless recall.
    Perfect = 5,
}

impl Rating {
    /// All six ratings in ascending quality order.
    pub const ALL: [Rating; 6] = [
        Rating::Blackout,
        Rating::Incorrect,
        Rating::Familiar,
        Rating::Hard,
        Rating::Good,
        Rating::Perfect,
    ];

    /// Numeric quality on the 0-5 scale.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// True when the material was not recalled (quality below 3).
    pub fn is_lapse(self) -> bool {
        self.value() < 3
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    /// Validates a raw quality value from a client. Out-of-range input
    /// is rejected, never clamped.
    fn try_from(value: u8) -> Result<Rating, InvalidRating> {
        match value {
            0 => Ok(Rating::Blackout),
            1 => Ok(Rating::Incorrect),
            2 => Ok(Rating::Familiar),
            3 => Ok(Rating::Hard),
            4 => Ok(Rating::Good),
            5 => Ok(Rating::Perfect),
            other => Err(InvalidRating(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_accepts_the_whole_scale() {
        for value in 0..=5u8 {
            let rating = Rating::try_from(value).unwrap();
            assert_eq!(rating.value(), value);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Rating::try_from(6), Err(InvalidRating(6)));
        assert_eq!(Rating::try_from(255), Err(InvalidRating(255)));
    }

    #[test]
    fn test_lapse_boundary() {
        assert!(Rating::Blackout.is_lapse());
        assert!(Rating::Familiar.is_lapse());
        assert!(!Rating::Hard.is_lapse());
        assert!(!Rating::Perfect.is_lapse());
    }

    #[test]
    fn test_all_is_exhaustive_and_ascending() {
        assert_eq!(Rating::ALL.len(), 6);
        for (expected, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(rating.value() as usize, expected);
        }
    }

    #[test]
    fn test_error_message_names_the_value() {
        let err = Rating::try_from(9).unwrap_err();
        assert_eq!(err.to_string(), "invalid rating 9: expected a value from 0 to 5");
    }
}
