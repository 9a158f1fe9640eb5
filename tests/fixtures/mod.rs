//! Test fixtures and mock implementations for integration testing

use matchday::error::{Result, RosterError};
use matchday::storage::{InMemoryKeyValueStore, KeyValueStore};
use matchday::types::{Player, PlayerSkills};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Store that records every write and can be switched into a failing mode
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: InMemoryKeyValueStore,
    writes: Mutex<Vec<(String, String)>>,
    fail_writes: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// All writes made so far as (key, value) pairs
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }

    pub fn write_count(&self) -> usize {
        self.writes().len()
    }

    /// Make every subsequent write fail as if storage quota were exhausted
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for RecordingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RosterError::StorageWriteFailed {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            }
            .into());
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((key.to_string(), value.to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        self.inner.remove_item(key)
    }
}

/// Skills whose mean is exactly `rank`
pub fn skills_for_rank(rank: i32) -> PlayerSkills {
    PlayerSkills::uniform(rank)
}

/// Create a player with the given ID and rank
pub fn create_test_player(id: &str, rank: i32) -> Player {
    Player::new(id.to_string(), format!("Player {}", id), skills_for_rank(rank))
}

/// Fifteen distinct ranks in descending order
pub const DESCENDING_RANKS: [i32; 15] = [99, 95, 90, 85, 80, 75, 70, 65, 60, 55, 50, 45, 40, 35, 30];
