//! Match-day configuration

use crate::types::TeamColor;
use serde::{Deserialize, Serialize};

/// Number of teams a match day is split into
pub const TEAM_COUNT: usize = 3;

/// Players per team
pub const TEAM_SIZE: usize = 5;

/// Players that must be selected before balancing
pub const SQUAD_SIZE: usize = TEAM_COUNT * TEAM_SIZE;

/// Fixed name and color of a team slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPreset {
    pub name: &'static str,
    pub color: TeamColor,
}

/// Team slots in assignment order; ties in the balancer go to the earlier slot
pub static TEAM_PRESETS: [TeamPreset; TEAM_COUNT] = [
    TeamPreset {
        name: "קבוצה כחולה",
        color: TeamColor::Blue,
    },
    TeamPreset {
        name: "קבוצה לבנה",
        color: TeamColor::White,
    },
    TeamPreset {
        name: "קבוצה אדומה",
        color: TeamColor::Red,
    },
];

/// Match-day shape settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchdaySettings {
    /// Number of teams to split the selection into
    pub team_count: usize,
    /// Players per team
    pub team_size: usize,
}

impl Default for MatchdaySettings {
    fn default() -> Self {
        Self {
            team_count: TEAM_COUNT,
            team_size: TEAM_SIZE,
        }
    }
}

impl MatchdaySettings {
    /// Total players a selection must hold
    pub fn squad_size(&self) -> usize {
        self.team_count * self.team_size
    }
}
