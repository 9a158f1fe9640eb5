//! Durable storage for the roster
//!
//! This module defines the key-value store seam the roster is persisted
//! through, file-backed and in-memory stores, and the roster persistence
//! adapter with its schema migration.

pub mod roster;
pub mod store;

// Re-export commonly used types
pub use roster::RosterStorage;
pub use store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
