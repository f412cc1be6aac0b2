//! Pure claim resolution.
//!
//! Everything here is side-effect free: functions look at the hand ledger and
//! team membership and produce a verdict. The state machine in `game.rs`
//! applies verdicts (scores, card removal, records, status changes).

use std::collections::HashMap;

use crate::domain::catalog::HalfSuitId;
use crate::domain::hands::Hands;
use crate::domain::state::{Assignment, ClaimScenario, PlayerId, TeamId};
use crate::errors::domain::{DomainError, IllegalActionKind, NotFoundKind};

/// Outcome of running a claim against the current hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimVerdict {
    /// The claim resolved immediately.
    Resolved {
        success: bool,
        point_to: TeamId,
        scenario: ClaimScenario,
    },
    /// Every card sits with the opposing team; a counter-claim window opens.
    AwaitingCounter,
}

/// Which side of the table holds a half-suit's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Possession {
    OneTeam(TeamId),
    Split,
}

/// Locate every card of `hs` and report whether one team holds them all.
pub fn possession_of(
    hands: &Hands,
    hs: HalfSuitId,
    membership: &HashMap<PlayerId, TeamId>,
) -> Result<Possession, DomainError> {
    let mut seen: Option<TeamId> = None;
    for card in hs.cards() {
        let holder = hands.holder_of(card).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("{card} is not in play"))
        })?;
        let team = team_of(membership, holder)?;
        match seen {
            None => seen = Some(team),
            Some(t) if t == team => {}
            Some(_) => return Ok(Possession::Split),
        }
    }
    // hs.cards() is never empty, so seen is set by now.
    seen.map(Possession::OneTeam)
        .ok_or_else(|| DomainError::invalid_state("half-suit has no cards"))
}

/// Require the assignment to cover exactly the half-suit's six cards.
pub fn check_assignment_coverage(
    hs: HalfSuitId,
    assignment: &Assignment,
) -> Result<(), DomainError> {
    let expected = hs.cards();
    if assignment.len() != expected.len()
        || !expected.iter().all(|card| assignment.contains_key(card))
    {
        return Err(DomainError::illegal(
            IllegalActionKind::AssignmentCoverage,
            format!("assignment must name all {} cards of {hs}", expected.len()),
        ));
    }
    Ok(())
}

/// Require every assigned holder to sit on `required`.
pub fn check_assignment_team(
    assignment: &Assignment,
    membership: &HashMap<PlayerId, TeamId>,
    required: TeamId,
) -> Result<(), DomainError> {
    for (card, player) in assignment {
        if team_of(membership, player)? != required {
            return Err(DomainError::illegal(
                IllegalActionKind::AssignmentWrongTeam,
                format!("{card} assigned to {player}, who is not on {}", required.display_name()),
            ));
        }
    }
    Ok(())
}

/// True when every assigned card is in the named player's hand.
pub fn assignment_matches(hands: &Hands, assignment: &Assignment) -> bool {
    assignment
        .iter()
        .all(|(card, player)| hands.has_card(player, *card))
}

/// Resolve a claim made for the claimant's own side.
///
/// The possession check decides the path: all with the claimant's team means
/// the assignment is graded now, all with the opposing team opens a
/// counter-claim window, and a split across teams fails outright.
pub fn resolve_claim(
    hands: &Hands,
    membership: &HashMap<PlayerId, TeamId>,
    claim_team: TeamId,
    hs: HalfSuitId,
    assignment: &Assignment,
) -> Result<ClaimVerdict, DomainError> {
    check_assignment_coverage(hs, assignment)?;
    match possession_of(hands, hs, membership)? {
        Possession::OneTeam(team) if team == claim_team => {
            let success = assignment_matches(hands, assignment);
            Ok(resolved(success, claim_team, ClaimScenario::WithinTeam))
        }
        Possession::OneTeam(_) => Ok(ClaimVerdict::AwaitingCounter),
        Possession::Split => Ok(resolved(false, claim_team, ClaimScenario::WithinTeam)),
    }
}

/// Resolve a claim that names the opposing team's holders directly.
///
/// Graded on the spot regardless of where the cards actually sit; the
/// assignment itself must name only opponents.
pub fn resolve_claim_for_other_team(
    hands: &Hands,
    membership: &HashMap<PlayerId, TeamId>,
    claim_team: TeamId,
    hs: HalfSuitId,
    assignment: &Assignment,
) -> Result<ClaimVerdict, DomainError> {
    check_assignment_coverage(hs, assignment)?;
    check_assignment_team(assignment, membership, claim_team.opponent())?;
    let success = assignment_matches(hands, assignment);
    Ok(resolved(success, claim_team, ClaimScenario::ForOtherTeam))
}

/// Grade the counter-claim that closes an awaiting window.
///
/// On failure the point goes to the team whose claim was countered, not to
/// the counter-claimant's opponents in the abstract; with two teams those
/// coincide, and `point_to` records it from the counter side.
pub fn resolve_counter_claim(
    hands: &Hands,
    membership: &HashMap<PlayerId, TeamId>,
    counter_team: TeamId,
    hs: HalfSuitId,
    assignment: &Assignment,
) -> Result<ClaimVerdict, DomainError> {
    check_assignment_coverage(hs, assignment)?;
    check_assignment_team(assignment, membership, counter_team)?;
    let success = assignment_matches(hands, assignment);
    Ok(resolved(success, counter_team, ClaimScenario::Counter))
}

/// Grade the original claimant's assignment after a unanimous pass.
pub fn resolve_unopposed(
    hands: &Hands,
    membership: &HashMap<PlayerId, TeamId>,
    claim_team: TeamId,
    hs: HalfSuitId,
    assignment: &Assignment,
) -> Result<ClaimVerdict, DomainError> {
    check_assignment_coverage(hs, assignment)?;
    check_assignment_team(assignment, membership, claim_team.opponent())?;
    let success = assignment_matches(hands, assignment);
    Ok(resolved(success, claim_team, ClaimScenario::Unopposed))
}

fn resolved(success: bool, team: TeamId, scenario: ClaimScenario) -> ClaimVerdict {
    ClaimVerdict::Resolved {
        success,
        point_to: if success { team } else { team.opponent() },
        scenario,
    }
}

fn team_of(
    membership: &HashMap<PlayerId, TeamId>,
    player: &str,
) -> Result<TeamId, DomainError> {
    membership
        .get(player)
        .copied()
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, player.to_string()))
}
