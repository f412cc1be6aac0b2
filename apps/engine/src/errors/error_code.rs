//! Error codes for the Half Suit engine API boundary.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings the
//! transport layer puts in its payloads.

use core::fmt;

use crate::errors::domain::{DomainError, IllegalActionKind, NotFoundKind};

/// Centralized error codes for the Half Suit engine.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game status / turn
    InvalidState,
    NotYourTurn,

    // Resource not found
    GameNotFound,
    PlayerNotFound,
    CardNotFound,
    HalfSuitNotFound,

    // Rule violations
    AskTeammate,
    AskWithoutHalfSuit,
    AskEmptyHanded,
    RespondentEmptyHanded,
    AskOwnCard,
    AssignmentCoverage,
    AssignmentWrongTeam,
    WrongTeamForCounter,
    AlreadyPassed,
    PassesOutstanding,
    DuplicatePlayer,
    DuplicateName,
    GameFull,
    InvalidPlayerId,
    InvalidPlayerName,
    InvalidPlayerCount,

    // Half-suit lifecycle
    AlreadyResolved,

    // Request parsing
    ParseCard,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::NotYourTurn => "NOT_YOUR_TURN",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::CardNotFound => "CARD_NOT_FOUND",
            ErrorCode::HalfSuitNotFound => "HALF_SUIT_NOT_FOUND",
            ErrorCode::AskTeammate => "ASK_TEAMMATE",
            ErrorCode::AskWithoutHalfSuit => "ASK_WITHOUT_HALF_SUIT",
            ErrorCode::AskEmptyHanded => "ASK_EMPTY_HANDED",
            ErrorCode::RespondentEmptyHanded => "RESPONDENT_EMPTY_HANDED",
            ErrorCode::AskOwnCard => "ASK_OWN_CARD",
            ErrorCode::AssignmentCoverage => "ASSIGNMENT_COVERAGE",
            ErrorCode::AssignmentWrongTeam => "ASSIGNMENT_WRONG_TEAM",
            ErrorCode::WrongTeamForCounter => "WRONG_TEAM_FOR_COUNTER",
            ErrorCode::AlreadyPassed => "ALREADY_PASSED",
            ErrorCode::PassesOutstanding => "PASSES_OUTSTANDING",
            ErrorCode::DuplicatePlayer => "DUPLICATE_PLAYER",
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
            ErrorCode::GameFull => "GAME_FULL",
            ErrorCode::InvalidPlayerId => "INVALID_PLAYER_ID",
            ErrorCode::InvalidPlayerName => "INVALID_PLAYER_NAME",
            ErrorCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ErrorCode::AlreadyResolved => "ALREADY_RESOLVED",
            ErrorCode::ParseCard => "PARSE_CARD",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::InvalidState(_) => ErrorCode::InvalidState,
            DomainError::NotYourTurn => ErrorCode::NotYourTurn,
            DomainError::NotFound { kind, .. } => match kind {
                NotFoundKind::Game => ErrorCode::GameNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Card => ErrorCode::CardNotFound,
                NotFoundKind::HalfSuit => ErrorCode::HalfSuitNotFound,
            },
            DomainError::IllegalAction { kind, .. } => match kind {
                IllegalActionKind::AskTeammate => ErrorCode::AskTeammate,
                IllegalActionKind::AskWithoutHalfSuit => ErrorCode::AskWithoutHalfSuit,
                IllegalActionKind::AskEmptyHanded => ErrorCode::AskEmptyHanded,
                IllegalActionKind::RespondentEmptyHanded => ErrorCode::RespondentEmptyHanded,
                IllegalActionKind::AskOwnCard => ErrorCode::AskOwnCard,
                IllegalActionKind::AssignmentCoverage => ErrorCode::AssignmentCoverage,
                IllegalActionKind::AssignmentWrongTeam => ErrorCode::AssignmentWrongTeam,
                IllegalActionKind::WrongTeamForCounter => ErrorCode::WrongTeamForCounter,
                IllegalActionKind::AlreadyPassed => ErrorCode::AlreadyPassed,
                IllegalActionKind::PassesOutstanding => ErrorCode::PassesOutstanding,
                IllegalActionKind::DuplicatePlayer => ErrorCode::DuplicatePlayer,
                IllegalActionKind::DuplicateName => ErrorCode::DuplicateName,
                IllegalActionKind::GameFull => ErrorCode::GameFull,
                IllegalActionKind::InvalidPlayerId => ErrorCode::InvalidPlayerId,
                IllegalActionKind::InvalidPlayerName => ErrorCode::InvalidPlayerName,
                IllegalActionKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
            },
            DomainError::AlreadyResolved(_) => ErrorCode::AlreadyResolved,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
        }
    }
}
