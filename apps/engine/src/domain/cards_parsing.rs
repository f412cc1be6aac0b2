//! Card parsing from id tokens (e.g., "7S", "10H", "JokerJ")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Last character is the suit letter, everything before it the rank
        // symbol ("10" and "Joker"/"Cut" are multi-character).
        let suit_ch = s
            .chars()
            .last()
            .ok_or_else(|| DomainError::ParseCard(s.to_string()))?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];

        let rank = match rank_part {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "Joker" => Rank::Joker,
            "Cut" => Rank::Cut,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let suit = match suit_ch {
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'J' => Suit::Joker,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };

        Card::new(rank, suit).map_err(|_| DomainError::ParseCard(s.to_string()))
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
