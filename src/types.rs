//! Common types used throughout the roster service

use crate::config::skills::DEFAULT_SKILL_VALUE;
use crate::rating::rank_of;
use crate::season::create_empty_ledger;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for players
pub type PlayerId = String;

/// Season ledger: round number (1..=10) to that round's stats
pub type Ledger = BTreeMap<u32, RoundStats>;

/// The six rated skill attributes of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Pace,
    Shooting,
    Passing,
    Defending,
    Physical,
    Technique,
}

impl Skill {
    /// All skills in display order
    pub const ALL: [Skill; 6] = [
        Skill::Pace,
        Skill::Shooting,
        Skill::Passing,
        Skill::Defending,
        Skill::Physical,
        Skill::Technique,
    ];

    /// Display label in the league's locale
    pub fn label(&self) -> &'static str {
        match self {
            Skill::Pace => "מהירות",
            Skill::Shooting => "בעיטה",
            Skill::Passing => "מסירה",
            Skill::Defending => "הגנה",
            Skill::Physical => "פיזיות",
            Skill::Technique => "טכניקה",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skill::Pace => write!(f, "pace"),
            Skill::Shooting => write!(f, "shooting"),
            Skill::Passing => write!(f, "passing"),
            Skill::Defending => write!(f, "defending"),
            Skill::Physical => write!(f, "physical"),
            Skill::Technique => write!(f, "technique"),
        }
    }
}

/// Skill ratings for a player, conventionally in 30..=99
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub pace: i32,
    pub shooting: i32,
    pub passing: i32,
    pub defending: i32,
    pub physical: i32,
    pub technique: i32,
}

impl Default for PlayerSkills {
    fn default() -> Self {
        Self::uniform(DEFAULT_SKILL_VALUE)
    }
}

impl PlayerSkills {
    /// All six skills set to the same value
    pub fn uniform(value: i32) -> Self {
        Self {
            pace: value,
            shooting: value,
            passing: value,
            defending: value,
            physical: value,
            technique: value,
        }
    }

    pub fn get(&self, skill: Skill) -> i32 {
        match skill {
            Skill::Pace => self.pace,
            Skill::Shooting => self.shooting,
            Skill::Passing => self.passing,
            Skill::Defending => self.defending,
            Skill::Physical => self.physical,
            Skill::Technique => self.technique,
        }
    }

    pub fn set(&mut self, skill: Skill, value: i32) {
        match skill {
            Skill::Pace => self.pace = value,
            Skill::Shooting => self.shooting = value,
            Skill::Passing => self.passing = value,
            Skill::Defending => self.defending = value,
            Skill::Physical => self.physical = value,
            Skill::Technique => self.technique = value,
        }
    }

    /// Skill values in display order
    pub fn values(&self) -> [i32; 6] {
        Skill::ALL.map(|skill| self.get(skill))
    }

    /// Copy with every value forced into the slider range
    pub fn clamped(&self) -> Self {
        let mut skills = *self;
        for skill in Skill::ALL {
            skills.set(skill, crate::config::skills::clamp_skill(self.get(skill)));
        }
        skills
    }
}

/// Points and goals recorded for one round; a missing field reads as 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundStats {
    pub points: i32,
    pub goals: i32,
}

/// Which cell of a round a ledger update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Points,
    Goals,
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatField::Points => write!(f, "points"),
            StatField::Goals => write!(f, "goals"),
        }
    }
}

/// Season totals for a player, widened so summing ten rounds cannot overflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub points: i64,
    pub goals: i64,
}

/// A squad member
///
/// `rank` is derived from `skills` and only changes through
/// [`Player::set_skills`] or [`Player::refresh_rank`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    skills: PlayerSkills,
    rank: i32,
    #[serde(default = "create_empty_ledger", deserialize_with = "ledger_or_empty")]
    pub league_data: Ledger,
}

/// Stored `null` ledgers load as a fresh empty ledger, like missing ones
fn ledger_or_empty<'de, D>(deserializer: D) -> Result<Ledger, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Ledger>::deserialize(deserializer)?.unwrap_or_else(create_empty_ledger))
}

impl Player {
    /// Create a player with a derived rank and an empty season ledger
    pub fn new(id: PlayerId, name: impl Into<String>, skills: PlayerSkills) -> Self {
        Self {
            id,
            name: name.into(),
            photo: None,
            skills,
            rank: rank_of(&skills),
            league_data: create_empty_ledger(),
        }
    }

    pub fn skills(&self) -> &PlayerSkills {
        &self.skills
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Replace the skills and re-derive the rank
    pub fn set_skills(&mut self, skills: PlayerSkills) {
        self.skills = skills;
        self.rank = rank_of(&skills);
    }

    /// Re-derive the rank from the current skills, returning true if it changed
    pub fn refresh_rank(&mut self) -> bool {
        let derived = rank_of(&self.skills);
        let changed = derived != self.rank;
        self.rank = derived;
        changed
    }
}

/// Partial update applied by the roster repository
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub skills: Option<PlayerSkills>,
    pub photo: Option<String>,
}

impl PlayerUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn skills(skills: PlayerSkills) -> Self {
        Self {
            skills: Some(skills),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.skills.is_none() && self.photo.is_none()
    }
}

/// Display color of a match-day team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Blue,
    White,
    Red,
}

impl TeamColor {
    /// Presentation token for this color
    pub fn token(&self) -> &'static str {
        match self {
            TeamColor::Blue => "bg-blue-600",
            TeamColor::White => "bg-slate-100 text-slate-900",
            TeamColor::Red => "bg-red-600",
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamColor::Blue => write!(f, "Blue"),
            TeamColor::White => write!(f, "White"),
            TeamColor::Red => write!(f, "Red"),
        }
    }
}

/// A balanced match-day team; rebuilt on every balancing run, never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub name: String,
    pub color: TeamColor,
    pub players: Vec<Player>,
    pub total_rank: i32,
}

impl Team {
    pub fn new(name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            name: name.into(),
            color,
            players: Vec::new(),
            total_rank: 0,
        }
    }

    /// Add a player and accumulate their rank
    pub fn push(&mut self, player: Player) {
        self.total_rank += player.rank();
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
