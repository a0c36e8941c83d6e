//! Score history as shown on the history screen: every completed round per
//! player, with running totals.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameSession, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScoreDetail {
    pub round_no: u16,
    pub call: u8,
    pub scored: u8,
    pub round_score: i32,
    pub cumulative_score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHistory {
    pub player_id: PlayerId,
    pub name: String,
    pub rounds: Vec<RoundScoreDetail>,
}

impl PlayerHistory {
    pub fn cumulative_score(&self) -> i32 {
        self.rounds.last().map_or(0, |r| r.cumulative_score)
    }

    /// Rounds where the call was matched exactly.
    pub fn calls_made(&self) -> usize {
        self.rounds.iter().filter(|r| r.call == r.scored).count()
    }
}

/// History of one active player.
pub fn player_history(
    session: &GameSession,
    player_id: PlayerId,
) -> Result<PlayerHistory, DomainError> {
    let player = session
        .player(player_id)
        .ok_or_else(|| DomainError::player_not_found(player_id))?;

    let mut cumulative = 0;
    let rounds = session
        .history()
        .iter()
        .filter_map(|round| {
            let result = round.results.iter().find(|r| r.player_id == player_id)?;
            cumulative += result.round_score;
            Some(RoundScoreDetail {
                round_no: round.round_no,
                call: result.call,
                scored: result.scored,
                round_score: result.round_score,
                cumulative_score: cumulative,
            })
        })
        .collect();

    Ok(PlayerHistory {
        player_id,
        name: player.name.clone(),
        rounds,
    })
}

/// History of every active player, in player order.
pub fn score_table(session: &GameSession) -> Vec<PlayerHistory> {
    session
        .players()
        .iter()
        .filter_map(|p| player_history(session, p.id).ok())
        .collect()
}
