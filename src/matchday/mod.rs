//! Match-day team balancing
//!
//! Splits a full match-day selection into fixed-size teams of comparable
//! total rank.

pub mod balancer;

// Re-export commonly used types
pub use balancer::{max_rank_spread, GreedyTeamBalancer, TeamBalancer};
