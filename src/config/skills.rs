//! Skill rating bounds and defaults

/// Lowest value the skill sliders allow
pub const MIN_SKILL_VALUE: i32 = 30;

/// Highest value the skill sliders allow
pub const MAX_SKILL_VALUE: i32 = 99;

/// Value every skill starts at for a newly added player
pub const DEFAULT_SKILL_VALUE: i32 = 70;

/// Name given to a player added without one
pub const DEFAULT_PLAYER_NAME: &str = "שחקן חדש";

/// Inclusive skill range used at input boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for SkillBounds {
    fn default() -> Self {
        Self {
            min: MIN_SKILL_VALUE,
            max: MAX_SKILL_VALUE,
        }
    }
}

impl SkillBounds {
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Clamp a skill value into the default slider range
pub fn clamp_skill(value: i32) -> i32 {
    SkillBounds::default().clamp(value)
}
