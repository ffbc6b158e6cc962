//! Spaced-repetition scheduling engine: pure SM-2 state transitions
//! plus per-rating previews. Persistence and UI live with the caller.

pub mod models;

pub use models::sm2::{Projection, ReviewPreview, compute_next_state, preview_intervals};
pub use models::{Card, InvalidRating, Rating, ReviewEvent, ReviewState};
