//! Roster management
//!
//! The roster repository owns the squad and the current match-day selection;
//! every mutation writes through the persistence adapter.

pub mod repository;
pub mod selection;

// Re-export commonly used types
pub use repository::RosterRepository;
pub use selection::{Selection, SelectionOutcome};
