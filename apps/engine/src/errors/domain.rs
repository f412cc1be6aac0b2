//! Domain-level error type used across the engine and the service arena.
//!
//! This error type is transport-agnostic. A rejected operation leaves game
//! state unchanged; every variant is a local, synchronous, recoverable
//! condition that callers surface to clients via [`crate::errors::ErrorCode`].

use thiserror::Error;

/// Domain-level not found entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Card,
    HalfSuit,
}

/// Rule violations that are neither a state nor a turn problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalActionKind {
    /// Asker and respondent share a team.
    AskTeammate,
    /// Asker holds no card of the asked half-suit.
    AskWithoutHalfSuit,
    /// Asker has no cards left.
    AskEmptyHanded,
    /// Respondent has no cards left.
    RespondentEmptyHanded,
    /// Asking for a card you hold while bluffs are disabled.
    AskOwnCard,
    /// Assignment does not cover exactly the half-suit's six cards.
    AssignmentCoverage,
    /// Assignment names players from a team the claim variant forbids.
    AssignmentWrongTeam,
    /// Counter-claim or pass attempted from the wrong team.
    WrongTeamForCounter,
    /// Counter-claim by a player who already passed.
    AlreadyPassed,
    /// Unopposed claim before every opposing member passed.
    PassesOutstanding,
    /// Player id already present in the game.
    DuplicatePlayer,
    /// Display name already taken.
    DuplicateName,
    /// Game is at capacity.
    GameFull,
    /// Malformed player id.
    InvalidPlayerId,
    /// Malformed display name.
    InvalidPlayerName,
    /// Player count outside the configured bounds.
    InvalidPlayerCount,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Operation not legal in the current game status.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Acting player does not hold the turn.
    #[error("not your turn")]
    NotYourTurn,
    /// Missing resource in domain terms.
    #[error("not found {kind:?}: {detail}")]
    NotFound {
        kind: NotFoundKind,
        detail: String,
    },
    /// Rule violation.
    #[error("illegal action {kind:?}: {detail}")]
    IllegalAction {
        kind: IllegalActionKind,
        detail: String,
    },
    /// Half-suit was already claimed and is permanently out of play.
    #[error("already resolved: {0}")]
    AlreadyResolved(String),
    /// Malformed card token.
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    pub fn illegal(kind: IllegalActionKind, detail: impl Into<String>) -> Self {
        Self::IllegalAction {
            kind,
            detail: detail.into(),
        }
    }

    pub fn already_resolved(detail: impl Into<String>) -> Self {
        Self::AlreadyResolved(detail.into())
    }
}
