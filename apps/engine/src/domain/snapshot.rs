//! Per-player redacted snapshots.
//!
//! A snapshot is the only way state leaves the engine. Other players' hands
//! are reduced to a count before anything is serialized, so hidden cards
//! cannot leak through this interface.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::game::Game;
use crate::domain::state::{
    AskRecord, ClaimRecord, GameStatus, HalfSuitState, PlayerId, Team, TeamId,
};
use crate::errors::domain::DomainError;

/// One player as everyone sees them: hand contents only for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub card_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hand: Option<Vec<Card>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub teams: [Team; 2],
    pub players: Vec<PlayerView>,
    pub half_suits: Vec<HalfSuitState>,
    pub current_turn: Option<PlayerId>,
    pub turn_count: u32,
    /// Truncated to the most recent `visible_ask_history` entries.
    pub ask_history: Vec<AskRecord>,
    pub claim_history: Vec<ClaimRecord>,
    /// Unix timestamp of the last state change.
    pub last_updated: i64,
}

impl Game {
    /// Build the view of this game as seen by `for_player`.
    pub fn snapshot(&self, for_player: &str) -> Result<GameSnapshot, DomainError> {
        self.player(for_player)?;

        let players = self
            .players()
            .iter()
            .map(|p| {
                let hand = (p.id == for_player).then(|| {
                    let mut cards = self.hands.cards_of(&p.id).to_vec();
                    cards.sort();
                    cards
                });
                PlayerView {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    team: p.team,
                    card_count: self.hands.count(&p.id),
                    hand,
                }
            })
            .collect();

        let asks = self.ask_history();
        let visible = self
            .settings()
            .visible_ask_history
            .unwrap_or(asks.len())
            .min(asks.len());
        let ask_history = asks[asks.len() - visible..].to_vec();

        Ok(GameSnapshot {
            status: self.status(),
            teams: self.teams().clone(),
            players,
            half_suits: self.half_suits().to_vec(),
            current_turn: self.current_turn().cloned(),
            turn_count: self.turn_count(),
            ask_history,
            claim_history: self.claim_history().to_vec(),
            last_updated: self.last_updated().unix_timestamp(),
        })
    }
}
