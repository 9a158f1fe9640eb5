//! Ledger construction, cell updates and totals

use crate::types::{Ledger, RoundStats, StatField, Totals};

/// Number of rounds in a season
pub const SEASON_ROUNDS: u32 = 10;

/// Fresh ledger with every round zeroed
///
/// Each call builds a new map, so two players never share ledger state.
pub fn create_empty_ledger() -> Ledger {
    (1..=SEASON_ROUNDS)
        .map(|round| (round, RoundStats::default()))
        .collect()
}

/// Whether `round` is one of the season's numbered rounds
pub fn is_valid_round(round: u32) -> bool {
    (1..=SEASON_ROUNDS).contains(&round)
}

/// Replace a single (round, field) cell, leaving every other cell untouched
///
/// A round missing from the ledger is created with its other field at 0.
/// No validation is applied to `value`.
pub fn set_stat(mut ledger: Ledger, round: u32, field: StatField, value: i32) -> Ledger {
    let stats = ledger.entry(round).or_default();
    match field {
        StatField::Points => stats.points = value,
        StatField::Goals => stats.goals = value,
    }
    ledger
}

/// Points and goals summed over all rounds present in the ledger
pub fn totals(ledger: &Ledger) -> Totals {
    ledger.values().fold(Totals::default(), |acc, stats| Totals {
        points: acc.points + i64::from(stats.points),
        goals: acc.goals + i64::from(stats.goals),
    })
}

/// Coerce raw user input for a ledger cell
///
/// Reads the leading integer (`"12abc"` is 12, `"3.7"` is 3); input with no
/// leading digits, or that overflows, becomes 0.
pub fn parse_stat_input(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().map(|value| sign * value).unwrap_or(0)
}
