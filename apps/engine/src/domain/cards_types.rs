//! Core card-related types: Card, Rank, Suit

use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    /// Suit carried only by the two jokers.
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn letter(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Joker => 'J',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
    Cut,
}

impl Rank {
    pub const LOW: [Rank; 6] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
    ];
    pub const HIGH: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks 2-7: a suit's "low" half.
    pub fn is_low(&self) -> bool {
        Self::LOW.contains(self)
    }

    /// Ranks 9-A: a suit's "high" half.
    pub fn is_high(&self) -> bool {
        Self::HIGH.contains(self)
    }

    /// The 8s and the two jokers form the special half-suit.
    pub fn is_special(&self) -> bool {
        matches!(self, Rank::Eight | Rank::Joker | Rank::Cut)
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "Joker",
            Rank::Cut => "Cut",
        }
    }
}

/// Whether a rank/suit pair names a real card of the 54-card deck.
///
/// Joker ranks pair only with the joker suit; every other rank (the four 8s
/// included) carries a standard suit.
pub fn valid_card(rank: Rank, suit: Suit) -> bool {
    if matches!(rank, Rank::Joker | Rank::Cut) {
        suit == Suit::Joker
    } else {
        suit != Suit::Joker
    }
}

/// A single card of the 54-card deck.
///
/// Fields are private: a `Card` can only be built through [`Card::new`] (or
/// parsed from its id token), so every reachable value is a real deck member
/// and [`Card::half_suit`] is total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Result<Self, DomainError> {
        if !valid_card(rank, suit) {
            return Err(DomainError::not_found(
                NotFoundKind::Card,
                format!("incompatible rank/suit: {rank:?} of {suit:?}"),
            ));
        }
        Ok(Self { rank, suit })
    }

    /// Construction for the fixed catalog tables, where validity is known.
    pub(crate) const fn assemble(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Stable unique id token, e.g. `"7S"`, `"10H"`, `"JokerJ"`.
    pub fn id(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.letter())
    }
}

// Ord on Card is only for stable sorting and map keys: suit order then rank
// order. It has no game meaning.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}
