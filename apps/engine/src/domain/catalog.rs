//! Static catalog: the 54-card deck and its partition into 9 half-suits.
//!
//! Pure lookups only; nothing here touches game state. Each of the eight
//! suit-bound half-suits is one standard suit crossed with the low (2-7) or
//! high (9-A) run; the ninth ("special") holds the four 8s and both jokers.

use crate::domain::cards_types::{valid_card, Card, Rank, Suit};
use crate::errors::domain::{DomainError, NotFoundKind};

pub const HALF_SUIT_COUNT: usize = 9;
pub const HALF_SUIT_SIZE: usize = 6;
pub const DECK_SIZE: usize = 54;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum HalfSuitId {
    SpadesLow,
    SpadesHigh,
    HeartsLow,
    HeartsHigh,
    DiamondsLow,
    DiamondsHigh,
    ClubsLow,
    ClubsHigh,
    Special,
}

impl HalfSuitId {
    pub const ALL: [HalfSuitId; HALF_SUIT_COUNT] = [
        HalfSuitId::SpadesLow,
        HalfSuitId::SpadesHigh,
        HalfSuitId::HeartsLow,
        HalfSuitId::HeartsHigh,
        HalfSuitId::DiamondsLow,
        HalfSuitId::DiamondsHigh,
        HalfSuitId::ClubsLow,
        HalfSuitId::ClubsHigh,
        HalfSuitId::Special,
    ];

    /// Wire id, 0-8.
    pub const fn index(&self) -> u8 {
        match self {
            HalfSuitId::SpadesLow => 0,
            HalfSuitId::SpadesHigh => 1,
            HalfSuitId::HeartsLow => 2,
            HalfSuitId::HeartsHigh => 3,
            HalfSuitId::DiamondsLow => 4,
            HalfSuitId::DiamondsHigh => 5,
            HalfSuitId::ClubsLow => 6,
            HalfSuitId::ClubsHigh => 7,
            HalfSuitId::Special => 8,
        }
    }

    pub fn from_index(idx: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(idx as usize)
            .copied()
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::HalfSuit, format!("half-suit id {idx}"))
            })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            HalfSuitId::SpadesLow => "Spades Low",
            HalfSuitId::SpadesHigh => "Spades High",
            HalfSuitId::HeartsLow => "Hearts Low",
            HalfSuitId::HeartsHigh => "Hearts High",
            HalfSuitId::DiamondsLow => "Diamonds Low",
            HalfSuitId::DiamondsHigh => "Diamonds High",
            HalfSuitId::ClubsLow => "Clubs Low",
            HalfSuitId::ClubsHigh => "Clubs High",
            HalfSuitId::Special => "Eights & Jokers",
        }
    }

    /// The fixed 6 cards of this half-suit.
    pub fn cards(&self) -> [Card; HALF_SUIT_SIZE] {
        fn run(suit: Suit, ranks: [Rank; HALF_SUIT_SIZE]) -> [Card; HALF_SUIT_SIZE] {
            ranks.map(|rank| Card::assemble(rank, suit))
        }
        match self {
            HalfSuitId::SpadesLow => run(Suit::Spades, Rank::LOW),
            HalfSuitId::SpadesHigh => run(Suit::Spades, Rank::HIGH),
            HalfSuitId::HeartsLow => run(Suit::Hearts, Rank::LOW),
            HalfSuitId::HeartsHigh => run(Suit::Hearts, Rank::HIGH),
            HalfSuitId::DiamondsLow => run(Suit::Diamonds, Rank::LOW),
            HalfSuitId::DiamondsHigh => run(Suit::Diamonds, Rank::HIGH),
            HalfSuitId::ClubsLow => run(Suit::Clubs, Rank::LOW),
            HalfSuitId::ClubsHigh => run(Suit::Clubs, Rank::HIGH),
            HalfSuitId::Special => [
                Card::assemble(Rank::Eight, Suit::Spades),
                Card::assemble(Rank::Eight, Suit::Hearts),
                Card::assemble(Rank::Eight, Suit::Diamonds),
                Card::assemble(Rank::Eight, Suit::Clubs),
                Card::assemble(Rank::Joker, Suit::Joker),
                Card::assemble(Rank::Cut, Suit::Joker),
            ],
        }
    }
}

impl std::fmt::Display for HalfSuitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-suit of a rank/suit pair; fails on combinations that name no card.
pub fn half_suit_of(rank: Rank, suit: Suit) -> Result<HalfSuitId, DomainError> {
    if !valid_card(rank, suit) {
        return Err(DomainError::not_found(
            NotFoundKind::Card,
            format!("incompatible rank/suit: {rank:?} of {suit:?}"),
        ));
    }
    Ok(half_suit_of_valid(rank, suit))
}

// Total on valid cards; `Card` construction guarantees validity.
fn half_suit_of_valid(rank: Rank, suit: Suit) -> HalfSuitId {
    if rank.is_special() {
        return HalfSuitId::Special;
    }
    let low = rank.is_low();
    match suit {
        Suit::Spades if low => HalfSuitId::SpadesLow,
        Suit::Spades => HalfSuitId::SpadesHigh,
        Suit::Hearts if low => HalfSuitId::HeartsLow,
        Suit::Hearts => HalfSuitId::HeartsHigh,
        Suit::Diamonds if low => HalfSuitId::DiamondsLow,
        Suit::Diamonds => HalfSuitId::DiamondsHigh,
        Suit::Clubs if low => HalfSuitId::ClubsLow,
        Suit::Clubs => HalfSuitId::ClubsHigh,
        // Joker suit only pairs with special ranks, handled above.
        Suit::Joker => HalfSuitId::Special,
    }
}

impl Card {
    /// The half-suit this card belongs to.
    pub fn half_suit(&self) -> HalfSuitId {
        half_suit_of_valid(self.rank(), self.suit())
    }
}

/// The full 54-card deck in catalog order.
pub fn all_cards() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for hs in HalfSuitId::ALL {
        deck.extend(hs.cards());
    }
    deck
}
