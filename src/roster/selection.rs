//! Match-day selection set

use crate::types::PlayerId;

/// Result of toggling a player in the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Player was added to the selection
    Selected,
    /// Player was already selected and has been removed
    Deselected,
    /// Selection is at capacity; nothing changed
    SelectionFull,
    /// No player with that ID is on the roster; nothing changed
    UnknownPlayer,
}

/// Ordered set of player IDs chosen for the current match day
///
/// Held in memory only; never persisted.
#[derive(Debug, Clone)]
pub struct Selection {
    ids: Vec<PlayerId>,
    capacity: usize,
}

impl Selection {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `id` if absent and there is room, remove it if present
    pub fn toggle(&mut self, id: &str) -> SelectionOutcome {
        if self.remove(id) {
            return SelectionOutcome::Deselected;
        }
        if self.is_full() {
            return SelectionOutcome::SelectionFull;
        }
        self.ids.push(id.to_string());
        SelectionOutcome::Selected
    }

    /// Drop `id` from the selection, returning whether it was selected
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[PlayerId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
