//! Test-only game state helpers for domain unit tests.

pub use state_helpers::{
    assignment, card, cards, lobby_game, rig_hands, set_turn, started_game, PLAYERS,
};

mod state_helpers {
    use crate::domain::cards_types::Card;
    use crate::domain::game::Game;
    use crate::domain::state::{Assignment, GameSettings};

    /// Six players in join order. Auto-balance alternates teams, so the odd
    /// seats (p1, p3, p5) land on team 1 and the even seats on team 2.
    pub const PLAYERS: [&str; 6] = ["p1", "p2", "p3", "p4", "p5", "p6"];

    pub fn card(tok: &str) -> Card {
        tok.parse().unwrap_or_else(|e| panic!("bad card token {tok:?}: {e}"))
    }

    pub fn cards(toks: &[&str]) -> Vec<Card> {
        toks.iter().map(|t| card(t)).collect()
    }

    /// Assignment from (card token, player id) pairs.
    pub fn assignment(pairs: &[(&str, &str)]) -> Assignment {
        pairs
            .iter()
            .map(|(tok, player)| (card(tok), player.to_string()))
            .collect()
    }

    /// A full six-player lobby with a deterministic rng.
    pub fn lobby_game(seed: u64) -> Game {
        let mut game = Game::with_seed(GameSettings::default(), seed);
        for (i, id) in PLAYERS.iter().enumerate() {
            game.join(id, &format!("Player{i}")).unwrap();
        }
        game
    }

    /// A started six-player game; hands dealt from the seed.
    pub fn started_game(seed: u64) -> Game {
        let mut game = lobby_game(seed);
        game.start().unwrap();
        game
    }

    /// Replace every hand with an explicit distribution. Cards not listed
    /// are simply out of play, which is fine as long as the half-suit under
    /// test is fully placed.
    pub fn rig_hands(game: &mut Game, dist: &[(&str, &[&str])]) {
        game.hands.by_player.clear();
        for (player, toks) in dist {
            game.hands
                .by_player
                .insert(player.to_string(), cards(toks));
        }
    }

    pub fn set_turn(game: &mut Game, player: &str) {
        game.current_turn = Some(player.to_string());
    }
}
