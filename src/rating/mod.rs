//! Skill and rank model
//!
//! A player's rank is the rounded mean of their six skill ratings. It is
//! derived, never set directly.

pub mod rank;

// Re-export commonly used functions
pub use rank::{rank_of, rank_of_values};
