//! The turn and claim state machine.
//!
//! `Game` owns the full authoritative state of one table: roster, hands,
//! half-suit ledger, histories, and the rng. All mutation goes through the
//! operations here; each either completes with state advanced or fails with
//! a [`DomainError`] and state untouched.

use std::collections::{BTreeSet, HashMap};

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use time::OffsetDateTime;

use crate::domain::cards_types::Card;
use crate::domain::catalog::{HalfSuitId, HALF_SUIT_COUNT};
use crate::domain::claims::{
    resolve_claim, resolve_claim_for_other_team, resolve_counter_claim, resolve_unopposed,
    ClaimVerdict,
};
use crate::domain::hands::Hands;
use crate::domain::state::{
    valid_player_id, valid_player_name, AskRecord, Assignment, ClaimRecord, ClaimScenario,
    GameSettings, GameStatus, HalfSuitState, Player, PlayerId, Team, TeamId,
};
use crate::errors::domain::{DomainError, IllegalActionKind, NotFoundKind};

/// Result of an ask: the appended record plus the turn holder afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutcome {
    pub record: AskRecord,
    pub turn: Option<PlayerId>,
}

/// Result of any operation that settled a half-suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClaim {
    pub record: ClaimRecord,
    pub point_to: TeamId,
    pub turn: Option<PlayerId>,
    pub finished: bool,
    pub winner: Option<TeamId>,
}

/// What a `claim` call produced: an immediate resolution or an open
/// counter-claim window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimProgress {
    Resolved(ResolvedClaim),
    AwaitingCounter { record: ClaimRecord },
}

/// Bookkeeping for an open counter-claim window.
#[derive(Debug, Clone)]
pub(crate) struct CounterWindow {
    /// Index of the awaiting record in `claim_history`.
    pub(crate) claim_index: usize,
    pub(crate) half_suit: HalfSuitId,
    pub(crate) claimant: PlayerId,
    pub(crate) team: TeamId,
    /// Opposing-team members who have passed so far.
    pub(crate) passed: BTreeSet<PlayerId>,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) settings: GameSettings,
    pub(crate) status: GameStatus,
    pub(crate) players: Vec<Player>,
    pub(crate) teams: [Team; 2],
    pub(crate) hands: Hands,
    pub(crate) half_suits: [HalfSuitState; HALF_SUIT_COUNT],
    pub(crate) current_turn: Option<PlayerId>,
    pub(crate) turn_count: u32,
    pub(crate) ask_history: Vec<AskRecord>,
    pub(crate) claim_history: Vec<ClaimRecord>,
    pub(crate) counter_window: Option<CounterWindow>,
    pub(crate) last_updated: OffsetDateTime,
    rng: ChaCha12Rng,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, ChaCha12Rng::from_os_rng())
    }

    /// Deterministic construction for reproducible deals and turn draws.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, ChaCha12Rng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, rng: ChaCha12Rng) -> Self {
        Self {
            settings,
            status: GameStatus::Lobby,
            players: Vec::new(),
            teams: [Team::new(TeamId::Team1), Team::new(TeamId::Team2)],
            hands: Hands::new(),
            half_suits: HalfSuitId::ALL.map(HalfSuitState::unclaimed),
            current_turn: None,
            turn_count: 0,
            ask_history: Vec::new(),
            claim_history: Vec::new(),
            counter_window: None,
            last_updated: OffsetDateTime::now_utc(),
            rng,
        }
    }

    // --- lobby ---

    /// Add a player in the lobby. Joins the smaller team; ties go to team 1.
    pub fn join(&mut self, id: &str, name: &str) -> Result<TeamId, DomainError> {
        self.require_status(GameStatus::Lobby, "join")?;
        if !valid_player_id(id) {
            return Err(DomainError::illegal(
                IllegalActionKind::InvalidPlayerId,
                format!("bad player id {id:?}"),
            ));
        }
        if !valid_player_name(name) {
            return Err(DomainError::illegal(
                IllegalActionKind::InvalidPlayerName,
                format!("bad player name {name:?}"),
            ));
        }
        if self.players.iter().any(|p| p.id == id) {
            return Err(DomainError::illegal(
                IllegalActionKind::DuplicatePlayer,
                format!("player {id} already joined"),
            ));
        }
        if self.players.iter().any(|p| p.name == name) {
            return Err(DomainError::illegal(
                IllegalActionKind::DuplicateName,
                format!("name {name:?} already taken"),
            ));
        }
        if self.players.len() >= self.settings.max_players {
            return Err(DomainError::illegal(
                IllegalActionKind::GameFull,
                format!("game is full at {} players", self.settings.max_players),
            ));
        }

        let team = if self.teams[1].players.len() < self.teams[0].players.len() {
            TeamId::Team2
        } else {
            TeamId::Team1
        };
        self.teams[team.slot()].players.push(id.to_string());
        self.players.push(Player {
            id: id.to_string(),
            name: name.to_string(),
            team,
        });
        self.touch();
        tracing::debug!(player = id, team = team.display_name(), "player joined");
        Ok(team)
    }

    /// Remove a player. In the lobby this frees the seat; once the game is
    /// running a departure aborts the game.
    pub fn leave(&mut self, id: &str) -> Result<(), DomainError> {
        self.player(id)?;
        match self.status {
            GameStatus::Lobby => {
                self.players.retain(|p| p.id != id);
                for team in &mut self.teams {
                    team.players.retain(|p| p != id);
                }
            }
            GameStatus::ActiveAsk | GameStatus::ActiveCounter => {
                tracing::info!(player = id, "player left mid-game, aborting");
                self.status = GameStatus::Finished;
                self.current_turn = None;
                self.counter_window = None;
            }
            GameStatus::Finished => {
                return Err(DomainError::invalid_state("game already finished"));
            }
        }
        self.touch();
        Ok(())
    }

    /// Move a lobby player to the opposite team.
    pub fn swap_team(&mut self, id: &str) -> Result<TeamId, DomainError> {
        self.require_status(GameStatus::Lobby, "swap team")?;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, id.to_string()))?;
        let from = player.team;
        let to = from.opponent();
        player.team = to;
        self.teams[from.slot()].players.retain(|p| p != id);
        self.teams[to.slot()].players.push(id.to_string());
        self.touch();
        Ok(to)
    }

    /// Deal and begin play with a uniformly random starting player.
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.require_status(GameStatus::Lobby, "start")?;
        let count = self.players.len();
        if count < self.settings.min_players || count > self.settings.max_players {
            return Err(DomainError::illegal(
                IllegalActionKind::InvalidPlayerCount,
                format!(
                    "need {}..={} players, have {count}",
                    self.settings.min_players, self.settings.max_players
                ),
            ));
        }
        if self.teams.iter().any(|t| t.players.is_empty()) {
            return Err(DomainError::illegal(
                IllegalActionKind::InvalidPlayerCount,
                "both teams need at least one player",
            ));
        }

        let seating: Vec<PlayerId> = self.players.iter().map(|p| p.id.clone()).collect();
        self.hands.shuffle_and_deal(&seating, &mut self.rng)?;
        self.half_suits = HalfSuitId::ALL.map(HalfSuitState::unclaimed);
        self.turn_count = 0;
        self.ask_history.clear();
        self.claim_history.clear();
        self.counter_window = None;
        self.current_turn = seating.choose(&mut self.rng).cloned();
        self.status = GameStatus::ActiveAsk;
        self.touch();
        tracing::info!(
            players = count,
            starter = self.current_turn.as_deref(),
            "game started"
        );
        Ok(())
    }

    // --- asks ---

    /// The turn holder asks an opponent for one specific card.
    pub fn ask(
        &mut self,
        asker: &str,
        respondent: &str,
        card: Card,
    ) -> Result<AskOutcome, DomainError> {
        self.require_status(GameStatus::ActiveAsk, "ask")?;
        if self.current_turn.as_deref() != Some(asker) {
            return Err(DomainError::NotYourTurn);
        }
        let asker_team = self.player(asker)?.team;
        let respondent_team = self.player(respondent)?.team;
        if asker_team == respondent_team {
            return Err(DomainError::illegal(
                IllegalActionKind::AskTeammate,
                format!("{asker} and {respondent} are both on {}", asker_team.display_name()),
            ));
        }
        if self.hands.count(asker) == 0 {
            return Err(DomainError::illegal(
                IllegalActionKind::AskEmptyHanded,
                format!("{asker} has no cards"),
            ));
        }
        if self.hands.count(respondent) == 0 {
            return Err(DomainError::illegal(
                IllegalActionKind::RespondentEmptyHanded,
                format!("{respondent} has no cards"),
            ));
        }
        if !self.hands.has_half_suit(asker, card.half_suit()) {
            return Err(DomainError::illegal(
                IllegalActionKind::AskWithoutHalfSuit,
                format!("{asker} holds no card of {}", card.half_suit()),
            ));
        }
        if !self.settings.allow_bluffs && self.hands.has_card(asker, card) {
            return Err(DomainError::illegal(
                IllegalActionKind::AskOwnCard,
                format!("{asker} already holds {card}"),
            ));
        }

        let success = self.hands.has_card(respondent, card);
        if success {
            self.hands.transfer(card, respondent, asker);
        } else {
            self.current_turn = Some(respondent.to_string());
        }
        self.turn_count += 1;
        let record = AskRecord {
            turn: self.turn_count,
            asker: asker.to_string(),
            respondent: respondent.to_string(),
            card,
            success,
        };
        self.ask_history.push(record.clone());
        self.touch();
        tracing::debug!(asker, respondent, card = %card, success, "ask");
        Ok(AskOutcome {
            record,
            turn: self.current_turn.clone(),
        })
    }

    // --- claims ---

    /// Claim a half-suit, naming the holder of each of its six cards.
    ///
    /// With `for_other_team` the assignment must name only opponents and is
    /// graded immediately. Otherwise the outcome depends on where the cards
    /// sit; see the resolver.
    pub fn claim(
        &mut self,
        claimant: &str,
        half_suit: HalfSuitId,
        assignment: Assignment,
        for_other_team: bool,
    ) -> Result<ClaimProgress, DomainError> {
        self.require_status(GameStatus::ActiveAsk, "claim")?;
        let team = self.player(claimant)?.team;
        self.require_unclaimed(half_suit)?;
        self.require_known_players(&assignment)?;

        let membership = self.membership();
        let verdict = if for_other_team {
            resolve_claim_for_other_team(&self.hands, &membership, team, half_suit, &assignment)?
        } else {
            resolve_claim(&self.hands, &membership, team, half_suit, &assignment)?
        };

        match verdict {
            ClaimVerdict::AwaitingCounter => {
                let record = self.open_counter_window(
                    claimant,
                    team,
                    half_suit,
                    Some(assignment),
                    for_other_team,
                );
                Ok(ClaimProgress::AwaitingCounter { record })
            }
            ClaimVerdict::Resolved {
                success,
                point_to,
                scenario,
            } => {
                let record = ClaimRecord {
                    turn: self.turn_count,
                    team,
                    claimant: claimant.to_string(),
                    half_suit,
                    assignment: Some(assignment),
                    is_for_other_team: for_other_team,
                    is_counter: false,
                    countered: None,
                    success,
                    scenario,
                };
                self.claim_history.push(record.clone());
                Ok(ClaimProgress::Resolved(self.settle(record, point_to)))
            }
        }
    }

    /// Declare the opposing team holds a half-suit, without an assignment.
    /// Opens the counter-claim window.
    pub fn claim_for_opponent(
        &mut self,
        claimant: &str,
        half_suit: HalfSuitId,
    ) -> Result<ClaimRecord, DomainError> {
        self.require_status(GameStatus::ActiveAsk, "claim for opponent")?;
        let team = self.player(claimant)?.team;
        self.require_unclaimed(half_suit)?;
        Ok(self.open_counter_window(claimant, team, half_suit, None, true))
    }

    /// Register one opposing-team pass on the open window. Idempotent per
    /// player. Returns true once the whole opposing team has passed.
    pub fn counter_claim_pass(&mut self, player: &str) -> Result<bool, DomainError> {
        self.require_status(GameStatus::ActiveCounter, "pass")?;
        let player_team = self.player(player)?.team;
        let window = self.window()?;
        if player_team != window.team.opponent() {
            return Err(DomainError::illegal(
                IllegalActionKind::WrongTeamForCounter,
                format!("{player} is not on the countering team"),
            ));
        }
        let opposing = window.team.opponent();
        let window = self.counter_window.as_mut().ok_or_else(window_gone)?;
        window.passed.insert(player.to_string());
        let passed = window.passed.clone();
        let all_passed = self.teams[opposing.slot()]
            .players
            .iter()
            .all(|p| passed.contains(p));
        self.touch();
        Ok(all_passed)
    }

    /// After a unanimous pass, the original claimant names the opposing
    /// holders and the claim is graded.
    pub fn claim_unopposed(
        &mut self,
        claimant: &str,
        assignment: Assignment,
    ) -> Result<ResolvedClaim, DomainError> {
        self.require_status(GameStatus::ActiveCounter, "unopposed claim")?;
        let window = self.window()?.clone();
        if window.claimant != claimant {
            return Err(DomainError::invalid_state(
                "only the original claimant resolves an unopposed claim",
            ));
        }
        let opposing = &self.teams[window.team.opponent().slot()];
        if !opposing.players.iter().all(|p| window.passed.contains(p)) {
            return Err(DomainError::illegal(
                IllegalActionKind::PassesOutstanding,
                "the opposing team has not fully passed",
            ));
        }
        self.require_known_players(&assignment)?;

        let membership = self.membership();
        let verdict = resolve_unopposed(
            &self.hands,
            &membership,
            window.team,
            window.half_suit,
            &assignment,
        )?;
        let ClaimVerdict::Resolved {
            success, point_to, ..
        } = verdict
        else {
            return Err(DomainError::invalid_state("unopposed claim did not resolve"));
        };

        let record = {
            let rec = &mut self.claim_history[window.claim_index];
            rec.scenario = ClaimScenario::Unopposed;
            rec.countered = Some(false);
            rec.success = success;
            rec.assignment = Some(assignment);
            rec.clone()
        };
        self.counter_window = None;
        Ok(self.settle(record, point_to))
    }

    /// An opposing player counters the open window with their own
    /// assignment, confined to their own team.
    pub fn counter_claim(
        &mut self,
        counter_claimant: &str,
        assignment: Assignment,
    ) -> Result<ResolvedClaim, DomainError> {
        self.require_status(GameStatus::ActiveCounter, "counter-claim")?;
        let counter_team = self.player(counter_claimant)?.team;
        let window = self.window()?.clone();
        if counter_team != window.team.opponent() {
            return Err(DomainError::illegal(
                IllegalActionKind::WrongTeamForCounter,
                format!("{counter_claimant} is not on the countering team"),
            ));
        }
        if window.passed.contains(counter_claimant) {
            return Err(DomainError::illegal(
                IllegalActionKind::AlreadyPassed,
                format!("{counter_claimant} already passed"),
            ));
        }
        self.require_known_players(&assignment)?;

        let membership = self.membership();
        let verdict = resolve_counter_claim(
            &self.hands,
            &membership,
            counter_team,
            window.half_suit,
            &assignment,
        )?;
        let ClaimVerdict::Resolved {
            success, point_to, ..
        } = verdict
        else {
            return Err(DomainError::invalid_state("counter-claim did not resolve"));
        };

        {
            let rec = &mut self.claim_history[window.claim_index];
            rec.scenario = ClaimScenario::Opposed;
            rec.countered = Some(true);
            rec.success = false;
        }
        let record = ClaimRecord {
            turn: self.turn_count,
            team: counter_team,
            claimant: counter_claimant.to_string(),
            half_suit: window.half_suit,
            assignment: Some(assignment),
            is_for_other_team: false,
            is_counter: true,
            countered: None,
            success,
            scenario: ClaimScenario::Counter,
        };
        self.claim_history.push(record.clone());
        self.counter_window = None;
        Ok(self.settle(record, point_to))
    }

    // --- accessors ---

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.slot()]
    }

    pub fn half_suits(&self) -> &[HalfSuitState; HALF_SUIT_COUNT] {
        &self.half_suits
    }

    pub fn current_turn(&self) -> Option<&PlayerId> {
        self.current_turn.as_ref()
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn ask_history(&self) -> &[AskRecord] {
        &self.ask_history
    }

    pub fn claim_history(&self) -> &[ClaimRecord] {
        &self.claim_history
    }

    pub fn last_updated(&self) -> OffsetDateTime {
        self.last_updated
    }

    /// The winning team once finished. None while running, and None for an
    /// aborted game whose scores are level.
    pub fn winner(&self) -> Option<TeamId> {
        if self.status != GameStatus::Finished {
            return None;
        }
        match self.teams[0].score.cmp(&self.teams[1].score) {
            std::cmp::Ordering::Greater => Some(TeamId::Team1),
            std::cmp::Ordering::Less => Some(TeamId::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn player(&self, id: &str) -> Result<&Player, DomainError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, id.to_string()))
    }

    // --- internals ---

    fn membership(&self) -> HashMap<PlayerId, TeamId> {
        self.players.iter().map(|p| (p.id.clone(), p.team)).collect()
    }

    fn require_status(&self, wanted: GameStatus, what: &str) -> Result<(), DomainError> {
        if self.status != wanted {
            return Err(DomainError::invalid_state(format!(
                "cannot {what} in {:?}",
                self.status
            )));
        }
        Ok(())
    }

    fn require_unclaimed(&self, hs: HalfSuitId) -> Result<(), DomainError> {
        if self.half_suits[hs.index() as usize].claimed {
            return Err(DomainError::already_resolved(format!(
                "{hs} was already claimed"
            )));
        }
        Ok(())
    }

    fn require_known_players(&self, assignment: &Assignment) -> Result<(), DomainError> {
        for player in assignment.values() {
            self.player(player)?;
        }
        Ok(())
    }

    fn open_counter_window(
        &mut self,
        claimant: &str,
        team: TeamId,
        half_suit: HalfSuitId,
        assignment: Option<Assignment>,
        is_for_other_team: bool,
    ) -> ClaimRecord {
        let record = ClaimRecord {
            turn: self.turn_count,
            team,
            claimant: claimant.to_string(),
            half_suit,
            assignment,
            is_for_other_team,
            is_counter: false,
            countered: None,
            success: false,
            scenario: ClaimScenario::AwaitingCounter,
        };
        self.claim_history.push(record.clone());
        self.counter_window = Some(CounterWindow {
            claim_index: self.claim_history.len() - 1,
            half_suit,
            claimant: claimant.to_string(),
            team,
            passed: BTreeSet::new(),
        });
        self.status = GameStatus::ActiveCounter;
        self.touch();
        tracing::info!(claimant, half_suit = %half_suit, "counter-claim window opened");
        record
    }

    /// Apply a resolution: score, retire the half-suit, strip its cards,
    /// re-seat the turn, detect game end.
    fn settle(&mut self, record: ClaimRecord, point_to: TeamId) -> ResolvedClaim {
        self.teams[point_to.slot()].score += 1;
        let hs = record.half_suit;
        let state = &mut self.half_suits[hs.index() as usize];
        state.claimed = true;
        state.claimed_by_team = Some(record.team);
        state.claimed_by_player = Some(record.claimant.clone());
        state.claimed_successfully = Some(record.success);
        self.hands.remove_cards(&hs.cards());

        let finished = self.half_suits.iter().all(|s| s.claimed);
        if finished {
            self.status = GameStatus::Finished;
            self.current_turn = None;
        } else {
            self.status = GameStatus::ActiveAsk;
            self.reseat_turn();
        }
        self.touch();
        tracing::info!(
            half_suit = %hs,
            point_to = point_to.display_name(),
            success = record.success,
            finished,
            "half-suit settled"
        );
        ResolvedClaim {
            record,
            point_to,
            turn: self.current_turn.clone(),
            finished,
            winner: self.winner(),
        }
    }

    /// When the turn holder just ran out of cards, hand the turn to a random
    /// teammate who still has some; clear it when the whole team is empty.
    fn reseat_turn(&mut self) {
        let Some(holder) = self.current_turn.clone() else {
            return;
        };
        if self.hands.count(&holder) > 0 {
            return;
        }
        let Ok(team) = self.player(&holder).map(|p| p.team) else {
            self.current_turn = None;
            return;
        };
        let candidates: Vec<PlayerId> = self.teams[team.slot()]
            .players
            .iter()
            .filter(|p| self.hands.count(p) > 0)
            .cloned()
            .collect();
        self.current_turn = candidates.choose(&mut self.rng).cloned();
    }

    fn window(&self) -> Result<&CounterWindow, DomainError> {
        self.counter_window.as_ref().ok_or_else(window_gone)
    }

    fn touch(&mut self) {
        self.last_updated = OffsetDateTime::now_utc();
    }
}

fn window_gone() -> DomainError {
    DomainError::invalid_state("no counter-claim window is open")
}
