//! Rank derivation from skill ratings

use crate::types::PlayerSkills;

/// Overall rank of a skill set: the arithmetic mean rounded half-up
///
/// A mean of exactly `x.5` rounds toward positive infinity, matching the
/// rounding the persisted rosters were produced with.
pub fn rank_of(skills: &PlayerSkills) -> i32 {
    rank_of_values(&skills.values())
}

/// Rounded half-up mean of a slice of ratings; 0 for an empty slice
pub fn rank_of_values(values: &[i32]) -> i32 {
    if values.is_empty() {
        return 0;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    let count = values.len() as i64;
    // floor(sum / count + 1/2) without leaving integer arithmetic
    (2 * sum + count).div_euclid(2 * count) as i32
}
