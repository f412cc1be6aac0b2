//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod catalog;
pub mod claims;
pub mod dealing;
pub mod game;
pub mod hands;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_hands;
#[cfg(test)]
mod tests_props_claims;
#[cfg(test)]
mod tests_props_dealing;

// Re-exports for ergonomics
pub use cards_types::{valid_card, Card, Rank, Suit};
pub use catalog::{all_cards, half_suit_of, HalfSuitId, DECK_SIZE, HALF_SUIT_COUNT, HALF_SUIT_SIZE};
pub use hands::Hands;
