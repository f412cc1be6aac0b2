//! Per-player hand ledger: who physically holds which card.
//!
//! The ledger owns the card distribution during a hand; the state machine in
//! `game.rs` never touches hand vectors directly. Uniqueness is by card: a
//! card is held by at most one player at any time.

use std::collections::HashMap;

use rand::Rng;

use crate::domain::cards_types::Card;
use crate::domain::catalog::HalfSuitId;
use crate::domain::dealing::shuffle_and_deal;
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct Hands {
    pub(crate) by_player: HashMap<PlayerId, Vec<Card>>,
}

impl Hands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal the full deck to `players` in seating order, replacing any
    /// previous distribution.
    pub fn shuffle_and_deal(
        &mut self,
        players: &[PlayerId],
        rng: &mut impl Rng,
    ) -> Result<(), DomainError> {
        let dealt = shuffle_and_deal(players, rng)?;
        self.by_player = dealt.into_iter().collect();
        Ok(())
    }

    /// Move `card` from one hand to another. Returns false (and changes
    /// nothing) when `from` does not actually hold the card; callers
    /// pre-check holder truth via [`Hands::has_card`].
    pub fn transfer(&mut self, card: Card, from: &str, to: &str) -> bool {
        let Some(from_hand) = self.by_player.get_mut(from) else {
            return false;
        };
        let Some(pos) = from_hand.iter().position(|c| *c == card) else {
            return false;
        };
        let removed = from_hand.remove(pos);
        self.by_player.entry(to.to_string()).or_default().push(removed);
        true
    }

    /// Strip the given cards from every hand wherever found. Returns how
    /// many were found; a short count tells the caller the request named
    /// cards already out of play.
    pub fn remove_cards(&mut self, cards: &[Card]) -> usize {
        let mut found = 0usize;
        for hand in self.by_player.values_mut() {
            let before = hand.len();
            hand.retain(|c| !cards.contains(c));
            found += before - hand.len();
        }
        found
    }

    pub fn holder_of(&self, card: Card) -> Option<&PlayerId> {
        self.by_player
            .iter()
            .find(|(_, hand)| hand.contains(&card))
            .map(|(player, _)| player)
    }

    pub fn has_card(&self, player: &str, card: Card) -> bool {
        self.by_player
            .get(player)
            .is_some_and(|hand| hand.contains(&card))
    }

    pub fn has_half_suit(&self, player: &str, hs: HalfSuitId) -> bool {
        self.by_player
            .get(player)
            .is_some_and(|hand| hand.iter().any(|c| c.half_suit() == hs))
    }

    pub fn count(&self, player: &str) -> usize {
        self.by_player.get(player).map_or(0, Vec::len)
    }

    pub fn cards_of(&self, player: &str) -> &[Card] {
        self.by_player.get(player).map_or(&[], Vec::as_slice)
    }

    /// All cards of a half-suit still held by someone.
    pub fn cards_of_half_suit_in_play(&self, hs: HalfSuitId) -> Vec<Card> {
        self.by_player
            .values()
            .flatten()
            .filter(|c| c.half_suit() == hs)
            .copied()
            .collect()
    }

    pub fn total_in_play(&self) -> usize {
        self.by_player.values().map(Vec::len).sum()
    }
}
