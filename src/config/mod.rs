//! Configuration management for the matchday tool
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;
pub mod matchday;
pub mod skills;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings, StorageSettings};
pub use matchday::{MatchdaySettings, TeamPreset};
pub use skills::SkillBounds;
