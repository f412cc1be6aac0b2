//! Dealing tests: full-deck partition and the remainder rule.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::cards_types::Card;
use crate::domain::dealing::shuffle_and_deal;
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

fn players(n: usize) -> Vec<PlayerId> {
    (0..n).map(|i| format!("p{i}")).collect()
}

#[test]
fn six_players_get_nine_each() {
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let dealt = shuffle_and_deal(&players(6), &mut rng).unwrap();
    assert_eq!(dealt.len(), 6);
    for (_, hand) in &dealt {
        assert_eq!(hand.len(), 9);
    }
}

#[test]
fn deal_partitions_the_deck() {
    let mut rng = ChaCha12Rng::seed_from_u64(11);
    let dealt = shuffle_and_deal(&players(6), &mut rng).unwrap();
    let all: HashSet<Card> = dealt.iter().flat_map(|(_, h)| h.iter().copied()).collect();
    assert_eq!(all.len(), 54);
}

#[test]
fn remainder_goes_to_first_seats() {
    // 54 = 7 * 7 + 5, so seats 0-4 get 8 cards and seats 5-6 get 7.
    let mut rng = ChaCha12Rng::seed_from_u64(3);
    let dealt = shuffle_and_deal(&players(7), &mut rng).unwrap();
    let sizes: Vec<usize> = dealt.iter().map(|(_, h)| h.len()).collect();
    assert_eq!(sizes, vec![8, 8, 8, 8, 8, 7, 7]);
}

#[test]
fn seating_order_preserved() {
    let mut rng = ChaCha12Rng::seed_from_u64(5);
    let seats = players(6);
    let dealt = shuffle_and_deal(&seats, &mut rng).unwrap();
    let order: Vec<PlayerId> = dealt.into_iter().map(|(p, _)| p).collect();
    assert_eq!(order, seats);
}

#[test]
fn rejects_empty_and_oversized_tables() {
    let mut rng = ChaCha12Rng::seed_from_u64(1);
    assert!(matches!(
        shuffle_and_deal(&[], &mut rng),
        Err(DomainError::IllegalAction { .. })
    ));
    assert!(matches!(
        shuffle_and_deal(&players(55), &mut rng),
        Err(DomainError::IllegalAction { .. })
    ));
}

#[test]
fn same_seed_same_deal() {
    let seats = players(6);
    let mut a = ChaCha12Rng::seed_from_u64(42);
    let mut b = ChaCha12Rng::seed_from_u64(42);
    assert_eq!(
        shuffle_and_deal(&seats, &mut a).unwrap(),
        shuffle_and_deal(&seats, &mut b).unwrap()
    );
}
