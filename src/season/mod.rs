//! Season record store
//!
//! Per-player ledgers of points and goals across the ten rounds of a season,
//! and the aggregation used by the season table.

pub mod ledger;

// Re-export commonly used functions
pub use ledger::{
    create_empty_ledger, is_valid_round, parse_stat_input, set_stat, totals, SEASON_ROUNDS,
};
