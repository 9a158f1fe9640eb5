//! Team balancing algorithms
//!
//! This module handles splitting a match-day selection into teams whose
//! total ranks stay as close as a single greedy pass allows.

use crate::config::matchday::{MatchdaySettings, TeamPreset, TEAM_PRESETS, TEAM_SIZE};
use crate::error::{Result, RosterError};
use crate::types::{Player, Team};
use crate::utils::rank_difference;
use std::collections::HashSet;
use tracing::debug;

/// Trait for team balancing algorithms
pub trait TeamBalancer: Send + Sync {
    /// Split `players` into teams
    ///
    /// Returns no teams when `players` is not a complete selection.
    fn balance(&self, players: &[Player]) -> Vec<Team>;

    /// Number of players a complete selection holds
    fn squad_size(&self) -> usize;
}

/// Greedy rank-based balancer
///
/// Players are taken strongest first and each goes to the open team with the
/// lowest running total. This keeps the totals close but is not an optimal
/// partition; an exhaustive search could find a smaller spread.
#[derive(Debug, Clone)]
pub struct GreedyTeamBalancer {
    presets: &'static [TeamPreset],
    team_size: usize,
}

impl Default for GreedyTeamBalancer {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyTeamBalancer {
    /// Three teams of five with the league's fixed names and colors
    pub fn new() -> Self {
        Self {
            presets: &TEAM_PRESETS,
            team_size: TEAM_SIZE,
        }
    }

    /// Balancer for the configured match-day shape
    pub fn from_settings(settings: &MatchdaySettings) -> Result<Self> {
        if settings.team_count != TEAM_PRESETS.len() {
            return Err(RosterError::ConfigurationError {
                message: format!(
                    "{} teams requested but only {} team presets exist",
                    settings.team_count,
                    TEAM_PRESETS.len()
                ),
            }
            .into());
        }
        if settings.team_size == 0 {
            return Err(RosterError::ConfigurationError {
                message: "Team size must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(Self {
            presets: &TEAM_PRESETS,
            team_size: settings.team_size,
        })
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn team_count(&self) -> usize {
        self.presets.len()
    }

    fn empty_teams(&self) -> Vec<Team> {
        self.presets
            .iter()
            .map(|preset| Team::new(preset.name, preset.color))
            .collect()
    }
}

impl TeamBalancer for GreedyTeamBalancer {
    fn balance(&self, players: &[Player]) -> Vec<Team> {
        if players.len() != self.squad_size() {
            debug!(
                "Not balancing: {} players selected, {} required",
                players.len(),
                self.squad_size()
            );
            return Vec::new();
        }

        let distinct: HashSet<&str> = players.iter().map(|p| p.id.as_str()).collect();
        if distinct.len() != players.len() {
            debug!("Not balancing: selection contains duplicate players");
            return Vec::new();
        }

        // Stable sort keeps input order among equal ranks
        let mut ordered: Vec<&Player> = players.iter().collect();
        ordered.sort_by(|a, b| b.rank().cmp(&a.rank()));

        let mut teams = self.empty_teams();
        for player in ordered {
            // min_by_key returns the first minimum, so ties go to the earlier team
            let Some(team) = teams
                .iter_mut()
                .filter(|team| team.len() < self.team_size)
                .min_by_key(|team| team.total_rank)
            else {
                break;
            };
            team.push(player.clone());
        }

        debug!(
            "Balanced teams with totals {:?}",
            teams.iter().map(|t| t.total_rank).collect::<Vec<_>>()
        );
        teams
    }

    fn squad_size(&self) -> usize {
        self.presets.len() * self.team_size
    }
}

/// Largest difference between any two team totals; 0 for fewer than two teams
pub fn max_rank_spread(teams: &[Team]) -> i32 {
    let max = teams.iter().map(|t| t.total_rank).max();
    let min = teams.iter().map(|t| t.total_rank).min();
    match (max, min) {
        (Some(max), Some(min)) => rank_difference(max, min),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlayerSkills, TeamColor};

    fn create_test_player(id: &str, rank: i32) -> Player {
        Player::new(id.to_string(), format!("Player {}", id), PlayerSkills::uniform(rank))
    }

    fn squad_with_ranks(ranks: &[i32]) -> Vec<Player> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| create_test_player(&format!("p{}", i + 1), *rank))
            .collect()
    }

    fn ids(team: &Team) -> Vec<&str> {
        team.players.iter().map(|p| p.id.as_str()).collect()
    }

    fn ranks(team: &Team) -> Vec<i32> {
        team.players.iter().map(|p| p.rank()).collect()
    }

    const DESCENDING: [i32; 15] = [99, 95, 90, 85, 80, 75, 70, 65, 60, 55, 50, 45, 40, 35, 30];

    #[test]
    fn test_balance_produces_three_full_teams() {
        let balancer = GreedyTeamBalancer::new();
        let teams = balancer.balance(&squad_with_ranks(&DESCENDING));

        assert_eq!(teams.len(), 3);
        assert!(teams.iter().all(|team| team.len() == 5));

        let total: i32 = teams.iter().map(|t| t.total_rank).sum();
        assert_eq!(total, DESCENDING.iter().sum::<i32>());
    }

    #[test]
    fn test_balance_follows_greedy_assignment() {
        let balancer = GreedyTeamBalancer::new();
        let teams = balancer.balance(&squad_with_ranks(&DESCENDING));

        // 99→A 95→B 90→C 85→C 80→B 75→A 70→A 65→B(tie) 60→C 55→C
        // 50→B 45→A 40→A(full) 35→B(tie, full) 30→C
        assert_eq!(ranks(&teams[0]), vec![99, 75, 70, 45, 40]);
        assert_eq!(ranks(&teams[1]), vec![95, 80, 65, 50, 35]);
        assert_eq!(ranks(&teams[2]), vec![90, 85, 60, 55, 30]);
        assert_eq!(teams[0].total_rank, 329);
        assert_eq!(teams[1].total_rank, 325);
        assert_eq!(teams[2].total_rank, 320);
        assert_eq!(max_rank_spread(&teams), 9);
    }

    #[test]
    fn test_balance_sorts_unordered_input() {
        let balancer = GreedyTeamBalancer::new();
        let mut shuffled = DESCENDING;
        shuffled.reverse();
        shuffled.swap(3, 11);

        let teams = balancer.balance(&squad_with_ranks(&shuffled));
        assert_eq!(ranks(&teams[0]), vec![99, 75, 70, 45, 40]);
        assert_eq!(ranks(&teams[1]), vec![95, 80, 65, 50, 35]);
        assert_eq!(ranks(&teams[2]), vec![90, 85, 60, 55, 30]);
    }

    #[test]
    fn test_equal_ranks_keep_input_order_and_team_order() {
        let balancer = GreedyTeamBalancer::new();
        let teams = balancer.balance(&squad_with_ranks(&[70; 15]));

        assert_eq!(ids(&teams[0]), vec!["p1", "p4", "p7", "p10", "p13"]);
        assert_eq!(ids(&teams[1]), vec!["p2", "p5", "p8", "p11", "p14"]);
        assert_eq!(ids(&teams[2]), vec!["p3", "p6", "p9", "p12", "p15"]);
    }

    #[test]
    fn test_team_presets_in_fixed_order() {
        let balancer = GreedyTeamBalancer::new();
        let teams = balancer.balance(&squad_with_ranks(&DESCENDING));

        let colors: Vec<TeamColor> = teams.iter().map(|t| t.color).collect();
        assert_eq!(colors, vec![TeamColor::Blue, TeamColor::White, TeamColor::Red]);
        assert_eq!(teams[0].name, "קבוצה כחולה");
        assert_eq!(teams[2].color.token(), "bg-red-600");
    }

    #[test]
    fn test_wrong_selection_size_is_noop() {
        let balancer = GreedyTeamBalancer::new();

        assert!(balancer.balance(&squad_with_ranks(&[70; 14])).is_empty());
        assert!(balancer.balance(&squad_with_ranks(&[70; 16])).is_empty());
        assert!(balancer.balance(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_players_is_noop() {
        let balancer = GreedyTeamBalancer::new();
        let mut squad = squad_with_ranks(&DESCENDING);
        squad[14] = squad[0].clone();

        assert!(balancer.balance(&squad).is_empty());
    }

    #[test]
    fn test_from_settings() {
        let balancer = GreedyTeamBalancer::from_settings(&MatchdaySettings::default()).unwrap();
        assert_eq!(balancer.squad_size(), 15);
        assert_eq!(balancer.team_count(), 3);

        let settings = MatchdaySettings {
            team_count: 4,
            team_size: 5,
        };
        assert!(GreedyTeamBalancer::from_settings(&settings).is_err());

        let settings = MatchdaySettings {
            team_count: 3,
            team_size: 0,
        };
        assert!(GreedyTeamBalancer::from_settings(&settings).is_err());
    }

    #[test]
    fn test_max_rank_spread_edge_cases() {
        assert_eq!(max_rank_spread(&[]), 0);
        assert_eq!(max_rank_spread(&[Team::new("Solo", TeamColor::Blue)]), 0);
    }
}
