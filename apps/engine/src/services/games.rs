//! Game arena: id-keyed registry of live games.
//!
//! Every game sits behind its own mutex; `with_game` serializes operations
//! per game while distinct games stay independent. The registry itself is a
//! `DashMap`, so create/lookup/remove never block the whole arena.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::state::GameSettings;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[derive(Debug, Default)]
pub struct GameService {
    games: DashMap<GameId, Arc<Mutex<Game>>>,
}

impl GameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, settings: GameSettings) -> GameId {
        self.insert(Game::new(settings))
    }

    /// Create a game with a fixed rng seed, for reproducible tables.
    pub fn create_seeded(&self, settings: GameSettings, seed: u64) -> GameId {
        self.insert(Game::with_seed(settings, seed))
    }

    fn insert(&self, game: Game) -> GameId {
        let id = GameId::generate();
        self.games.insert(id, Arc::new(Mutex::new(game)));
        tracing::info!(game = %id, "game created");
        id
    }

    /// Run `f` against the game under its lock.
    ///
    /// The registry shard is released before the game lock is taken, so a
    /// long-running operation on one game never stalls arena lookups.
    pub fn with_game<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Game) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let game = self
            .games
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, id.to_string()))?;
        let mut guard = game.lock();
        f(&mut guard)
    }

    pub fn remove(&self, id: GameId) -> Result<(), DomainError> {
        self.games
            .remove(&id)
            .map(|_| tracing::info!(game = %id, "game removed"))
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, id.to_string()))
    }

    pub fn game_ids(&self) -> Vec<GameId> {
        self.games.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
