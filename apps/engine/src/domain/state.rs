//! Shared state vocabulary: statuses, players, teams, half-suit states,
//! history records, and game settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::catalog::HalfSuitId;

pub type PlayerId = String;

/// A claim assignment: claimed holder of each card in a half-suit.
pub type Assignment = BTreeMap<Card, PlayerId>;

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Waiting for players to join and settle teams.
    Lobby,
    /// Game running, waiting for the turn holder to ask (or anyone to claim).
    ActiveAsk,
    /// A counter-claim window is open; only passes and counter-claims act.
    ActiveCounter,
    /// All nine half-suits resolved, or the game was aborted.
    Finished,
}

/// One of the two teams. A closed 2-element set: `opponent` is total, so no
/// arithmetic on team numbers anywhere.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamId {
    Team1,
    Team2,
}

impl TeamId {
    pub const fn opponent(&self) -> TeamId {
        match self {
            TeamId::Team1 => TeamId::Team2,
            TeamId::Team2 => TeamId::Team1,
        }
    }

    pub(crate) const fn slot(&self) -> usize {
        match self {
            TeamId::Team1 => 0,
            TeamId::Team2 => 1,
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            TeamId::Team1 => "Team 1",
            TeamId::Team2 => "Team 2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// 0..=9; +1 per resolved half-suit.
    pub score: u8,
    /// Member ids in join order.
    pub players: Vec<PlayerId>,
}

impl Team {
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            score: 0,
            players: Vec::new(),
        }
    }
}

/// Claim lifecycle state of one half-suit. Once `claimed`, the half-suit is
/// permanently out of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfSuitState {
    pub id: HalfSuitId,
    pub claimed: bool,
    pub claimed_by_team: Option<TeamId>,
    pub claimed_by_player: Option<PlayerId>,
    pub claimed_successfully: Option<bool>,
}

impl HalfSuitState {
    pub fn unclaimed(id: HalfSuitId) -> Self {
        Self {
            id,
            claimed: false,
            claimed_by_team: None,
            claimed_by_player: None,
            claimed_successfully: None,
        }
    }
}

/// Immutable record of one ask; append-only history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRecord {
    pub turn: u32,
    pub asker: PlayerId,
    pub respondent: PlayerId,
    pub card: Card,
    pub success: bool,
}

/// How a claim resolved (or is resolving). Exhaustive by construction, so
/// every transition site must handle every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimScenario {
    /// Regular claim, resolved against the claimant's own side.
    WithinTeam,
    /// Direct claim of the opposing side's holders, with assignment.
    ForOtherTeam,
    /// Counter-claim window open; the only transient, non-final state.
    AwaitingCounter,
    /// An awaiting claim that the opposing team countered.
    Opposed,
    /// An awaiting claim resolved by the claimant after a unanimous pass.
    Unopposed,
    /// The counter-claim itself.
    Counter,
}

impl ClaimScenario {
    /// Whether a record in this scenario moved the score.
    pub fn scored(&self) -> bool {
        !matches!(self, ClaimScenario::AwaitingCounter | ClaimScenario::Opposed)
    }
}

/// Record of one claim. Mutated only when an `AwaitingCounter` record is
/// resolved in place to `Opposed` or `Unopposed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub turn: u32,
    pub team: TeamId,
    pub claimant: PlayerId,
    pub half_suit: HalfSuitId,
    /// Absent only while awaiting a counter opened without an assignment.
    pub assignment: Option<Assignment>,
    pub is_for_other_team: bool,
    pub is_counter: bool,
    /// Whether the opposing team countered; None until the window closes.
    pub countered: Option<bool>,
    pub success: bool,
    pub scenario: ClaimScenario,
}

impl ClaimRecord {
    /// Which team this record scored for, if it scored at all.
    pub fn point_to(&self) -> Option<TeamId> {
        if !self.scenario.scored() {
            return None;
        }
        if self.success {
            Some(self.team)
        } else {
            Some(self.team.opponent())
        }
    }
}

/// Engine-level game settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub min_players: usize,
    pub max_players: usize,
    /// Whether a player may ask for a card they themselves hold.
    pub allow_bluffs: bool,
    /// How many recent asks a snapshot exposes; None means all.
    pub visible_ask_history: Option<usize>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_players: 6,
            max_players: 9,
            allow_bluffs: true,
            visible_ask_history: Some(1),
        }
    }
}

/// Player ids: ASCII alphanumeric, 1..=50 chars.
pub fn valid_player_id(id: &str) -> bool {
    (1..=50).contains(&id.len()) && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Display names: ASCII alphanumeric, 1..=50 chars, no surrounding space.
pub fn valid_player_name(name: &str) -> bool {
    name == name.trim()
        && (1..=50).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}
