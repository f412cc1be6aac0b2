//! Environment overrides for [`GameSettings`].
//!
//! Overrides are lenient: a malformed value is logged and the default kept,
//! so a bad deployment variable degrades to stock rules instead of refusing
//! to host games.

use std::env;

use crate::domain::state::GameSettings;

const MIN_PLAYERS: &str = "HALFSUIT_MIN_PLAYERS";
const MAX_PLAYERS: &str = "HALFSUIT_MAX_PLAYERS";
const ALLOW_BLUFFS: &str = "HALFSUIT_ALLOW_BLUFFS";
const VISIBLE_ASK_HISTORY: &str = "HALFSUIT_VISIBLE_ASK_HISTORY";

/// Build settings from process environment on top of the defaults.
pub fn settings_from_env() -> GameSettings {
    settings_from(|name| env::var(name).ok())
}

fn settings_from(get: impl Fn(&str) -> Option<String>) -> GameSettings {
    let mut settings = GameSettings::default();

    if let Some(raw) = get(MIN_PLAYERS) {
        match raw.parse::<usize>() {
            Ok(n) if n >= 2 => settings.min_players = n,
            _ => tracing::warn!(var = MIN_PLAYERS, value = %raw, "ignoring bad override"),
        }
    }
    if let Some(raw) = get(MAX_PLAYERS) {
        match raw.parse::<usize>() {
            Ok(n) if n >= 2 => settings.max_players = n,
            _ => tracing::warn!(var = MAX_PLAYERS, value = %raw, "ignoring bad override"),
        }
    }
    if settings.min_players > settings.max_players {
        tracing::warn!(
            min = settings.min_players,
            max = settings.max_players,
            "min exceeds max, reverting player bounds to defaults"
        );
        let defaults = GameSettings::default();
        settings.min_players = defaults.min_players;
        settings.max_players = defaults.max_players;
    }

    if let Some(raw) = get(ALLOW_BLUFFS) {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => settings.allow_bluffs = true,
            "0" | "false" | "no" => settings.allow_bluffs = false,
            _ => tracing::warn!(var = ALLOW_BLUFFS, value = %raw, "ignoring bad override"),
        }
    }

    if let Some(raw) = get(VISIBLE_ASK_HISTORY) {
        match raw.to_ascii_lowercase().as_str() {
            "all" => settings.visible_ask_history = None,
            other => match other.parse::<usize>() {
                Ok(n) => settings.visible_ask_history = Some(n),
                Err(_) => {
                    tracing::warn!(var = VISIBLE_ASK_HISTORY, value = %raw, "ignoring bad override");
                }
            },
        }
    }

    settings
}
