//! Property tests for the claim resolver.
//!
//! Properties tested:
//! - A truthful assignment resolves exactly according to possession:
//!   all with the claimant's team succeeds, all with the opponents opens
//!   the counter window, any split fails outright
//! - The two final verdict branches always hand the point to opposite teams

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::catalog::HalfSuitId;
use crate::domain::claims::{resolve_claim, ClaimVerdict};
use crate::domain::hands::Hands;
use crate::domain::state::{Assignment, ClaimScenario, PlayerId, TeamId};
use crate::domain::test_prelude;

const SEATS: [&str; 6] = ["p1", "p2", "p3", "p4", "p5", "p6"];

fn membership() -> HashMap<PlayerId, TeamId> {
    SEATS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let team = if i % 2 == 0 { TeamId::Team1 } else { TeamId::Team2 };
            (p.to_string(), team)
        })
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Distribute spades-low over random seats, then claim truthfully.
    #[test]
    fn prop_truthful_claim_follows_possession(owners in prop::collection::vec(0usize..6, 6)) {
        let hs = HalfSuitId::SpadesLow;
        let membership = membership();

        let mut hands = Hands::new();
        for seat in SEATS {
            hands.by_player.insert(seat.to_string(), Vec::new());
        }
        let mut truthful = Assignment::new();
        for (card, owner) in hs.cards().into_iter().zip(&owners) {
            let seat = SEATS[*owner];
            hands.by_player.get_mut(seat).unwrap().push(card);
            truthful.insert(card, seat.to_string());
        }

        let holder_teams: Vec<TeamId> =
            owners.iter().map(|o| membership[SEATS[*o]]).collect();
        let all_team1 = holder_teams.iter().all(|t| *t == TeamId::Team1);
        let all_team2 = holder_teams.iter().all(|t| *t == TeamId::Team2);

        let verdict =
            resolve_claim(&hands, &membership, TeamId::Team1, hs, &truthful).unwrap();
        if all_team1 {
            prop_assert_eq!(verdict, ClaimVerdict::Resolved {
                success: true,
                point_to: TeamId::Team1,
                scenario: ClaimScenario::WithinTeam,
            });
        } else if all_team2 {
            prop_assert_eq!(verdict, ClaimVerdict::AwaitingCounter);
        } else {
            prop_assert_eq!(verdict, ClaimVerdict::Resolved {
                success: false,
                point_to: TeamId::Team2,
                scenario: ClaimScenario::WithinTeam,
            });
        }
    }

    /// A resolved verdict always awards exactly one team, and failure flips
    /// the point to the claimant's opponents.
    #[test]
    fn prop_resolution_awards_one_team(owners in prop::collection::vec(0usize..6, 6)) {
        let hs = HalfSuitId::SpadesLow;
        let membership = membership();

        let mut hands = Hands::new();
        for seat in SEATS {
            hands.by_player.insert(seat.to_string(), Vec::new());
        }
        // Claim everything onto seat 0 regardless of the real spread.
        let mut guess = Assignment::new();
        for (card, owner) in hs.cards().into_iter().zip(&owners) {
            hands.by_player.get_mut(SEATS[*owner]).unwrap().push(card);
            guess.insert(card, SEATS[0].to_string());
        }

        let verdict = resolve_claim(&hands, &membership, TeamId::Team1, hs, &guess).unwrap();
        if let ClaimVerdict::Resolved { success, point_to, .. } = verdict {
            if success {
                prop_assert_eq!(point_to, TeamId::Team1);
            } else {
                prop_assert_eq!(point_to, TeamId::Team2);
            }
        }
    }
}
