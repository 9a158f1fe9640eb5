//! Utility functions for the roster service

use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Generate a player ID from the current time in milliseconds
///
/// Two players created within the same millisecond get the same value; the
/// roster repository bumps colliding IDs with [`next_free_player_id`].
pub fn generate_player_id() -> String {
    current_timestamp().timestamp_millis().to_string()
}

/// First ID at or after `candidate` that `is_taken` rejects
///
/// Numeric IDs are bumped by one until free; non-numeric IDs get a numeric
/// suffix.
pub fn next_free_player_id(candidate: String, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(&candidate) {
        return candidate;
    }
    match candidate.parse::<i64>() {
        Ok(mut value) => loop {
            value += 1;
            let id = value.to_string();
            if !is_taken(&id) {
                return id;
            }
        },
        Err(_) => {
            let mut suffix = 1;
            loop {
                let id = format!("{}-{}", candidate, suffix);
                if !is_taken(&id) {
                    return id;
                }
                suffix += 1;
            }
        }
    }
}

/// Split `ids` into first occurrences (in order) and the repeats that follow
pub fn partition_repeated_ids(ids: &[String]) -> (Vec<&str>, Vec<&str>) {
    let mut seen = HashSet::new();
    ids.iter()
        .map(String::as_str)
        .partition(|id| seen.insert(*id))
}

/// Absolute difference between two team totals
pub fn rank_difference(rank1: i32, rank2: i32) -> i32 {
    (rank1 - rank2).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_player_id_is_numeric() {
        let id = generate_player_id();
        assert!(id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_next_free_player_id() {
        let taken = ["100", "101"];
        assert_eq!(
            next_free_player_id("100".to_string(), |id| taken.contains(&id)),
            "102"
        );
        assert_eq!(
            next_free_player_id("200".to_string(), |id| taken.contains(&id)),
            "200"
        );

        let taken = ["p", "p-1"];
        assert_eq!(
            next_free_player_id("p".to_string(), |id| taken.contains(&id)),
            "p-2"
        );
    }

    #[test]
    fn test_partition_repeated_ids() {
        let ids: Vec<String> = ["7", "3", "7", "9", "3", "7"]
            .iter()
            .map(|id| id.to_string())
            .collect();

        let (unique, repeated) = partition_repeated_ids(&ids);
        assert_eq!(unique, vec!["7", "3", "9"]);
        assert_eq!(repeated, vec!["7", "3", "7"]);

        let (unique, repeated) = partition_repeated_ids(&[]);
        assert!(unique.is_empty() && repeated.is_empty());
    }

    #[test]
    fn test_rank_difference() {
        assert_eq!(rank_difference(329, 320), 9);
        assert_eq!(rank_difference(320, 329), 9);
        assert_eq!(rank_difference(300, 300), 0);
    }
}
