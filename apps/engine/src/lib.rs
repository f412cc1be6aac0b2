#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::game::{AskOutcome, ClaimProgress, Game, ResolvedClaim};
pub use domain::snapshot::GameSnapshot;
pub use domain::state::{GameSettings, GameStatus, PlayerId, TeamId};
pub use domain::{Card, HalfSuitId, Rank, Suit};
pub use errors::{DomainError, ErrorCode};
pub use services::games::{GameId, GameService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
