//! Matchday - squad roster and team balancing for an amateur soccer league
//!
//! This crate keeps a roster of players with skill ratings, tracks a
//! ten-round season ledger per player, persists everything to a local
//! key-value store, and splits a 15-player match-day selection into three
//! balanced teams.

pub mod config;
pub mod error;
pub mod matchday;
pub mod rating;
pub mod roster;
pub mod season;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, RosterError};
pub use types::*;

// Re-export key components
pub use matchday::{GreedyTeamBalancer, TeamBalancer};
pub use roster::RosterRepository;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, RosterStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
