//! Shuffling and dealing of the 54-card deck.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::catalog::{all_cards, DECK_SIZE};
use crate::domain::cards_types::Card;
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, IllegalActionKind};

/// Shuffle the full deck and split it across `players` in seating order.
///
/// The split is near-even: `54 / n` cards each, with the remainder handed
/// out one-extra to the first `54 % n` players. Six players get exactly 9
/// cards each.
pub fn shuffle_and_deal(
    players: &[PlayerId],
    rng: &mut impl Rng,
) -> Result<Vec<(PlayerId, Vec<Card>)>, DomainError> {
    if players.is_empty() || players.len() > DECK_SIZE {
        return Err(DomainError::illegal(
            IllegalActionKind::InvalidPlayerCount,
            format!("cannot deal {DECK_SIZE} cards to {} players", players.len()),
        ));
    }

    let mut deck = all_cards();
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck.shuffle(rng);

    let per_player = DECK_SIZE / players.len();
    let extra = DECK_SIZE % players.len();

    let mut hands = Vec::with_capacity(players.len());
    let mut cursor = 0usize;
    for (seat, player) in players.iter().enumerate() {
        let count = per_player + usize::from(seat < extra);
        let hand = deck[cursor..cursor + count].to_vec();
        cursor += count;
        hands.push((player.clone(), hand));
    }
    debug_assert_eq!(cursor, DECK_SIZE);

    Ok(hands)
}
