//! Roster repository
//!
//! Owns the squad and the match-day selection. Ranks are kept consistent
//! with skills here, and every mutation is written through the persistence
//! adapter before returning.
//!
//! Operations that name an unknown player ID are silent no-ops. Storage
//! write failures are returned to the caller; the in-memory change has
//! already been applied when that happens.

use crate::config::matchday::MatchdaySettings;
use crate::config::skills::DEFAULT_PLAYER_NAME;
use crate::error::Result;
use crate::matchday::{GreedyTeamBalancer, TeamBalancer};
use crate::roster::selection::{Selection, SelectionOutcome};
use crate::season::{is_valid_round, set_stat, totals};
use crate::storage::{KeyValueStore, RosterStorage};
use crate::types::{Player, PlayerId, PlayerSkills, PlayerUpdate, StatField, Team, Totals};
use crate::utils::{generate_player_id, next_free_player_id};
use tracing::{debug, info};

/// In-memory roster backed by durable storage
pub struct RosterRepository<S> {
    storage: RosterStorage<S>,
    players: Vec<Player>,
    selection: Selection,
    balancer: Box<dyn TeamBalancer>,
}

impl<S: KeyValueStore> RosterRepository<S> {
    /// Load the roster and start with an empty selection
    pub fn open(storage: RosterStorage<S>) -> Result<Self> {
        Self::with_balancer(storage, Box::new(GreedyTeamBalancer::new()))
    }

    /// Load the roster using the configured match-day shape
    pub fn open_with_settings(
        storage: RosterStorage<S>,
        settings: &MatchdaySettings,
    ) -> Result<Self> {
        let balancer = GreedyTeamBalancer::from_settings(settings)?;
        Self::with_balancer(storage, Box::new(balancer))
    }

    /// Load the roster with a custom balancing algorithm
    pub fn with_balancer(
        storage: RosterStorage<S>,
        balancer: Box<dyn TeamBalancer>,
    ) -> Result<Self> {
        let players = storage.load()?;
        let selection = Selection::new(balancer.squad_size());
        Ok(Self {
            storage,
            players,
            selection,
            balancer,
        })
    }

    /// Snapshot of the roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn storage(&self) -> &RosterStorage<S> {
        &self.storage
    }

    /// Add a player with the given name and skills, returning its ID
    pub fn add(&mut self, name: impl Into<String>, skills: PlayerSkills) -> Result<PlayerId> {
        let id = next_free_player_id(generate_player_id(), |candidate| {
            self.players.iter().any(|p| p.id == candidate)
        });
        let player = Player::new(id.clone(), name, skills);
        info!(
            "Added player {} ({}) with rank {}",
            player.id,
            player.name,
            player.rank()
        );

        self.players.push(player);
        self.persist()?;
        Ok(id)
    }

    /// Add a player with the default name and skills
    pub fn add_default(&mut self) -> Result<PlayerId> {
        self.add(DEFAULT_PLAYER_NAME, PlayerSkills::default())
    }

    /// Apply a partial update; a new skill set re-derives the rank
    pub fn update(&mut self, id: &str, update: PlayerUpdate) -> Result<()> {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            debug!("Ignoring update for unknown player {}", id);
            return Ok(());
        };

        if let Some(name) = update.name {
            player.name = name;
        }
        if let Some(photo) = update.photo {
            player.photo = Some(photo);
        }
        if let Some(skills) = update.skills {
            player.set_skills(skills);
            debug!("Player {} rank is now {}", player.id, player.rank());
        }

        self.persist()
    }

    /// Remove a player and drop them from the selection
    ///
    /// Always written through, even when the roster becomes empty, so that
    /// a fully cleared roster is stored as empty rather than left stale.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() != before {
            info!("Removed player {}", id);
        } else {
            debug!("Ignoring removal of unknown player {}", id);
        }

        self.selection.remove(id);
        self.storage.save_forced(&self.players)
    }

    /// Set one (round, field) cell of a player's season ledger
    ///
    /// Rounds outside the season are ignored like unknown IDs.
    pub fn update_ledger_cell(
        &mut self,
        id: &str,
        round: u32,
        field: StatField,
        value: i32,
    ) -> Result<()> {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            debug!("Ignoring ledger update for unknown player {}", id);
            return Ok(());
        };
        if !is_valid_round(round) {
            debug!("Ignoring ledger update for player {} in round {}", id, round);
            return Ok(());
        }

        let ledger = std::mem::take(&mut player.league_data);
        player.league_data = set_stat(ledger, round, field, value);
        debug!("Player {} round {} {} = {}", id, round, field, value);

        self.persist()
    }

    /// Season totals for a player
    pub fn totals_for(&self, id: &str) -> Option<Totals> {
        self.get(id).map(|p| totals(&p.league_data))
    }

    /// Toggle a player in the match-day selection
    pub fn toggle_selection(&mut self, id: &str) -> SelectionOutcome {
        if self.get(id).is_none() {
            return SelectionOutcome::UnknownPlayer;
        }
        self.selection.toggle(id)
    }

    pub fn selected_ids(&self) -> &[PlayerId] {
        self.selection.ids()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Balance the current selection into teams
    ///
    /// Selected players are taken in roster order. Returns no teams unless the
    /// selection is complete.
    pub fn balance_selection(&self) -> Vec<Team> {
        let selected: Vec<Player> = self
            .players
            .iter()
            .filter(|p| self.selection.contains(&p.id))
            .cloned()
            .collect();
        self.balancer.balance(&selected)
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.players)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;
    use crate::types::RoundStats;
    use std::sync::Arc;

    fn create_test_repository() -> RosterRepository<Arc<InMemoryKeyValueStore>> {
        let store = Arc::new(InMemoryKeyValueStore::new());
        RosterRepository::open(RosterStorage::with_default_key(store)).unwrap()
    }

    fn reopen(
        repository: &RosterRepository<Arc<InMemoryKeyValueStore>>,
    ) -> RosterRepository<Arc<InMemoryKeyValueStore>> {
        let store = repository.storage().store().clone();
        RosterRepository::open(RosterStorage::with_default_key(store)).unwrap()
    }

    #[test]
    fn test_add_derives_rank_and_persists() {
        let mut repository = create_test_repository();
        let mut skills = PlayerSkills::uniform(99);
        skills.technique = 30;

        let id = repository.add("Dana", skills).unwrap();

        let player = repository.get(&id).unwrap();
        assert_eq!(player.rank(), 88);
        assert_eq!(player.league_data.len(), 10);

        let reloaded = reopen(&repository);
        assert_eq!(reloaded.players(), repository.players());
    }

    #[test]
    fn test_add_default_player() {
        let mut repository = create_test_repository();
        let id = repository.add_default().unwrap();

        let player = repository.get(&id).unwrap();
        assert_eq!(player.name, DEFAULT_PLAYER_NAME);
        assert_eq!(player.rank(), 70);
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut repository = create_test_repository();
        let ids: Vec<_> = (0..20)
            .map(|_| repository.add_default().unwrap())
            .collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_update_skills_recomputes_rank() {
        let mut repository = create_test_repository();
        let id = repository.add_default().unwrap();

        repository
            .update(&id, PlayerUpdate::skills(PlayerSkills::uniform(91)))
            .unwrap();

        assert_eq!(repository.get(&id).unwrap().rank(), 91);
        assert_eq!(reopen(&repository).get(&id).unwrap().rank(), 91);
    }

    #[test]
    fn test_update_name_leaves_other_fields() {
        let mut repository = create_test_repository();
        let id = repository.add("Old", PlayerSkills::uniform(60)).unwrap();
        repository
            .update_ledger_cell(&id, 1, StatField::Points, 3)
            .unwrap();

        repository.update(&id, PlayerUpdate::name("New")).unwrap();

        let player = repository.get(&id).unwrap();
        assert_eq!(player.name, "New");
        assert_eq!(player.rank(), 60);
        assert_eq!(*player.skills(), PlayerSkills::uniform(60));
        assert_eq!(player.league_data[&1].points, 3);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut repository = create_test_repository();
        repository.add_default().unwrap();
        let before = repository.players().to_vec();

        repository
            .update("missing", PlayerUpdate::name("Ghost"))
            .unwrap();
        repository
            .update_ledger_cell("missing", 1, StatField::Goals, 2)
            .unwrap();
        repository.remove("missing").unwrap();

        assert_eq!(repository.players(), before.as_slice());
    }

    #[test]
    fn test_update_ledger_cell() {
        let mut repository = create_test_repository();
        let id = repository.add_default().unwrap();

        repository
            .update_ledger_cell(&id, 1, StatField::Points, 3)
            .unwrap();
        repository
            .update_ledger_cell(&id, 2, StatField::Points, 3)
            .unwrap();
        repository
            .update_ledger_cell(&id, 1, StatField::Goals, 1)
            .unwrap();

        assert_eq!(
            repository.get(&id).unwrap().league_data[&1],
            RoundStats { points: 3, goals: 1 }
        );
        assert_eq!(
            repository.totals_for(&id),
            Some(Totals { points: 6, goals: 1 })
        );
        assert_eq!(
            reopen(&repository).totals_for(&id),
            Some(Totals { points: 6, goals: 1 })
        );
    }

    #[test]
    fn test_ledger_round_out_of_range_is_noop() {
        let mut repository = create_test_repository();
        let id = repository.add_default().unwrap();
        let before = repository.players().to_vec();

        repository
            .update_ledger_cell(&id, 11, StatField::Points, 3)
            .unwrap();
        repository
            .update_ledger_cell(&id, 0, StatField::Goals, 3)
            .unwrap();
        repository
            .update_ledger_cell("missing", 11, StatField::Points, 3)
            .unwrap();

        assert_eq!(repository.players(), before.as_slice());
        assert!(!repository.get(&id).unwrap().league_data.contains_key(&11));
        assert_eq!(reopen(&repository).players(), before.as_slice());
    }

    #[test]
    fn test_ledgers_are_not_shared_between_players() {
        let mut repository = create_test_repository();
        let first = repository.add_default().unwrap();
        let second = repository.add_default().unwrap();

        repository
            .update_ledger_cell(&first, 1, StatField::Points, 3)
            .unwrap();

        assert_eq!(repository.totals_for(&second), Some(Totals::default()));
    }

    #[test]
    fn test_remove_last_player_is_persisted() {
        let mut repository = create_test_repository();
        let id = repository.add_default().unwrap();

        repository.remove(&id).unwrap();

        assert!(repository.is_empty());
        let stored = repository
            .storage()
            .store()
            .get_item("soccer-squad")
            .unwrap();
        assert_eq!(stored.as_deref(), Some("[]"));
        assert!(reopen(&repository).is_empty());
    }

    #[test]
    fn test_remove_drops_player_from_selection() {
        let mut repository = create_test_repository();
        let kept = repository.add_default().unwrap();
        let removed = repository.add_default().unwrap();

        repository.toggle_selection(&kept);
        repository.toggle_selection(&removed);
        repository.remove(&removed).unwrap();

        assert_eq!(repository.selected_ids(), [kept]);
    }

    #[test]
    fn test_toggle_unknown_player() {
        let mut repository = create_test_repository();
        assert_eq!(
            repository.toggle_selection("missing"),
            SelectionOutcome::UnknownPlayer
        );
        assert!(repository.selected_ids().is_empty());
    }

    #[test]
    fn test_balance_requires_full_selection() {
        let mut repository = create_test_repository();
        let ids: Vec<_> = (0..16)
            .map(|_| repository.add_default().unwrap())
            .collect();

        for id in &ids[..14] {
            repository.toggle_selection(id);
        }
        assert!(repository.balance_selection().is_empty());

        repository.toggle_selection(&ids[14]);
        assert_eq!(
            repository.toggle_selection(&ids[15]),
            SelectionOutcome::SelectionFull
        );

        let teams = repository.balance_selection();
        assert_eq!(teams.len(), 3);
        assert!(teams.iter().all(|team| team.len() == 5));

        repository.clear_selection();
        assert!(repository.balance_selection().is_empty());
    }
}
