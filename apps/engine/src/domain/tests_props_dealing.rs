//! Property tests for dealing (pure domain, no services).
//!
//! Properties tested:
//! - Any table size 1..=54 receives the full deck with no duplicates
//! - Hand sizes differ by at most one and shrink toward the later seats

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::cards_types::Card;
use crate::domain::dealing::shuffle_and_deal;
use crate::domain::state::PlayerId;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_deal_partitions_any_table(n in 1usize..=54, seed in any::<u64>()) {
        let players: Vec<PlayerId> = (0..n).map(|i| format!("p{i}")).collect();
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let dealt = shuffle_and_deal(&players, &mut rng).unwrap();

        let all: HashSet<Card> = dealt.iter().flat_map(|(_, h)| h.iter().copied()).collect();
        prop_assert_eq!(all.len(), 54, "deck must be fully dealt without duplicates");

        let sizes: Vec<usize> = dealt.iter().map(|(_, h)| h.len()).collect();
        prop_assert_eq!(sizes.iter().sum::<usize>(), 54);
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1, "near-even split, got {:?}", sizes);
        prop_assert!(
            sizes.windows(2).all(|w| w[0] >= w[1]),
            "extras go to the first seats, got {:?}",
            sizes
        );
    }

    #[test]
    fn prop_same_seed_is_deterministic(n in 1usize..=54, seed in any::<u64>()) {
        let players: Vec<PlayerId> = (0..n).map(|i| format!("p{i}")).collect();
        let mut a = ChaCha12Rng::seed_from_u64(seed);
        let mut b = ChaCha12Rng::seed_from_u64(seed);
        prop_assert_eq!(
            shuffle_and_deal(&players, &mut a).unwrap(),
            shuffle_and_deal(&players, &mut b).unwrap()
        );
    }
}
