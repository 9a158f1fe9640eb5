//! Main application configuration
//!
//! This module defines the primary configuration structures for the matchday
//! tool, including environment variable and TOML file loading plus validation.

use crate::config::matchday::{MatchdaySettings, TEAM_COUNT, TEAM_SIZE};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
    pub matchday: MatchdaySettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Durable storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one JSON document per storage key
    pub data_dir: PathBuf,
    /// Key the roster is stored under
    pub roster_key: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "matchday".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            roster_key: "soccer-squad".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.apply_env();
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(data_dir) = env::var("MATCHDAY_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(key) = env::var("MATCHDAY_ROSTER_KEY") {
            self.storage.roster_key = key;
        }
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate storage settings
    if config.storage.data_dir.as_os_str().is_empty() {
        return Err(anyhow!("Data directory cannot be empty"));
    }
    if config.storage.roster_key.trim().is_empty() {
        return Err(anyhow!("Roster key cannot be empty"));
    }

    // The balancer's team presets are fixed at 3 teams of 5
    if config.matchday.team_count != TEAM_COUNT {
        return Err(anyhow!(
            "Team count must be {}, got {}",
            TEAM_COUNT,
            config.matchday.team_count
        ));
    }
    if config.matchday.team_size != TEAM_SIZE {
        return Err(anyhow!(
            "Team size must be {}, got {}",
            TEAM_SIZE,
            config.matchday.team_size
        ));
    }

    Ok(())
}
