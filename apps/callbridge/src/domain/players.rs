//! Player roster, names and composition rules.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::{MAX_NAME_LEN, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{Player, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

pub const PRESET_NAMES: [&str; MAX_PLAYERS] = [
    "Ashraf", "Rikon", "Amin", "Riad", "Sabuj", "Wahid", "Mamun", "Jafar",
];

/// Players active in a fresh session.
pub const DEFAULT_SELECTION: [PlayerId; 4] = [0, 1, 2, 3];

/// Roster player with its preset name and a zero total.
pub fn preset_player(player_id: PlayerId) -> Option<Player> {
    PRESET_NAMES.get(player_id as usize).map(|name| Player {
        id: player_id,
        name: (*name).to_string(),
        total_score: 0,
    })
}

/// Normalize a typed name into what the roster accepts.
///
/// Input is NFKC-normalized first so full-width letters and digits survive as
/// their ASCII forms; everything that is not ASCII alphanumeric is dropped and
/// the result is cut to `MAX_NAME_LEN` characters.
pub fn sanitize_name(raw: &str) -> String {
    raw.nfkc()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_NAME_LEN)
        .collect()
}

/// Case-insensitive comparison key for uniqueness checks.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn validate_player_count(count: usize) -> Result<(), DomainError> {
    if count < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooFewPlayers,
            format!("You need at least {MIN_PLAYERS} players"),
        ));
    }
    if count > MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TooManyPlayers,
            format!("Maximum {MAX_PLAYERS} players allowed"),
        ));
    }
    Ok(())
}

/// Every active player needs a non-empty name, unique ignoring case.
pub fn validate_names(players: &[Player]) -> Result<(), DomainError> {
    if players.iter().any(|p| p.name.trim().is_empty()) {
        return Err(DomainError::validation(
            ValidationKind::EmptyName,
            "Please enter all player names",
        ));
    }

    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(name_key(&player.name)) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateName,
                format!("Player names must be unique ({} is used twice)", player.name),
            ));
        }
    }
    Ok(())
}

/// Players ordered by total, highest first. Equal totals keep player order.
pub fn standings(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    ranked
}
