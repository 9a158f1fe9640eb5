//! Roster persistence adapter
//!
//! Reads and writes the whole roster as one JSON array under a fixed key.
//! Missing or unparsable data loads as an empty roster; write failures are
//! returned to the caller untouched.

use crate::error::{Result, RosterError};
use crate::storage::store::KeyValueStore;
use crate::types::Player;
use tracing::{debug, info, warn};

/// Key the roster is stored under unless configured otherwise
pub const DEFAULT_ROSTER_KEY: &str = "soccer-squad";

/// Loads and saves the roster through a key-value store
#[derive(Debug)]
pub struct RosterStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RosterStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Adapter using [`DEFAULT_ROSTER_KEY`]
    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_ROSTER_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the roster
    ///
    /// Records saved before the season ledger existed get a fresh empty
    /// ledger, and every rank is re-derived from its skills.
    pub fn load(&self) -> Result<Vec<Player>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            debug!("No roster stored under {}", self.key);
            return Ok(Vec::new());
        };

        let mut roster: Vec<Player> = match serde_json::from_str(&raw) {
            Ok(roster) => roster,
            Err(e) => {
                warn!("Ignoring unreadable roster under {}: {}", self.key, e);
                return Ok(Vec::new());
            }
        };

        for player in &mut roster {
            if player.refresh_rank() {
                debug!(
                    "Corrected stored rank for player {} to {}",
                    player.id,
                    player.rank()
                );
            }
        }

        info!("Loaded {} players from {}", roster.len(), self.key);
        Ok(roster)
    }

    /// Save the roster, skipping the write when it is empty
    ///
    /// Returns whether anything was written.
    pub fn save(&self, roster: &[Player]) -> Result<bool> {
        if roster.is_empty() {
            debug!("Skipping save of empty roster");
            return Ok(false);
        }
        self.write(roster)?;
        Ok(true)
    }

    /// Save the roster even when it is empty
    pub fn save_forced(&self, roster: &[Player]) -> Result<()> {
        self.write(roster)
    }

    fn write(&self, roster: &[Player]) -> Result<()> {
        let serialized =
            serde_json::to_string(roster).map_err(|e| RosterError::SerializationFailed {
                reason: e.to_string(),
            })?;
        self.store.set_item(&self.key, &serialized)?;
        debug!("Saved {} players to {}", roster.len(), self.key);
        Ok(())
    }
}
