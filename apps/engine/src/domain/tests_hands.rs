//! Hand-ledger tests: transfers, bulk removal, queries.

use crate::domain::catalog::HalfSuitId;
use crate::domain::hands::Hands;
use crate::domain::test_state_helpers::{card, cards};

fn rigged() -> Hands {
    let mut hands = Hands::new();
    hands
        .by_player
        .insert("ana".to_string(), cards(&["2S", "3S", "8H", "JokerJ"]));
    hands
        .by_player
        .insert("ben".to_string(), cards(&["4S", "9D", "CutJ"]));
    hands.by_player.insert("cal".to_string(), Vec::new());
    hands
}

#[test]
fn transfer_moves_one_card() {
    let mut hands = rigged();
    assert!(hands.transfer(card("4S"), "ben", "ana"));
    assert!(hands.has_card("ana", card("4S")));
    assert!(!hands.has_card("ben", card("4S")));
    assert_eq!(hands.count("ana"), 5);
    assert_eq!(hands.count("ben"), 2);
}

#[test]
fn transfer_fails_without_mutation_when_absent() {
    let mut hands = rigged();
    assert!(!hands.transfer(card("AS"), "ben", "ana"));
    assert!(!hands.transfer(card("2S"), "ben", "ana"));
    assert_eq!(hands.count("ana"), 4);
    assert_eq!(hands.count("ben"), 3);
    assert!(hands.has_card("ana", card("2S")));
}

#[test]
fn remove_cards_reports_found_count() {
    let mut hands = rigged();
    let removed = hands.remove_cards(&cards(&["8H", "CutJ", "AS"]));
    assert_eq!(removed, 2);
    assert!(!hands.has_card("ana", card("8H")));
    assert!(!hands.has_card("ben", card("CutJ")));
    assert_eq!(hands.total_in_play(), 5);
}

#[test]
fn holder_queries() {
    let hands = rigged();
    assert_eq!(hands.holder_of(card("9D")).unwrap(), "ben");
    assert_eq!(hands.holder_of(card("KC")), None);
    assert!(hands.has_half_suit("ana", HalfSuitId::SpadesLow));
    assert!(hands.has_half_suit("ana", HalfSuitId::Special));
    assert!(!hands.has_half_suit("ana", HalfSuitId::DiamondsHigh));
    assert!(!hands.has_half_suit("cal", HalfSuitId::SpadesLow));
}

#[test]
fn half_suit_in_play_filter() {
    let hands = rigged();
    let specials = hands.cards_of_half_suit_in_play(HalfSuitId::Special);
    assert_eq!(specials.len(), 3);
    for c in specials {
        assert_eq!(c.half_suit(), HalfSuitId::Special);
    }
    assert!(hands
        .cards_of_half_suit_in_play(HalfSuitId::HeartsLow)
        .is_empty());
}
