use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Index into the preset roster (0..=7). Stable for the life of a session.
pub type PlayerId = u8;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Choosing players, names, lead count and winning score.
    Setup,
    /// Rounds are being called, locked and submitted.
    Playing,
    /// Someone reached the winning score; no further rounds.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub total_score: i32,
}

/// One player's values for the in-progress round. `None` means not entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub player_id: PlayerId,
    pub call: Option<u8>,
    pub scored: Option<u8>,
}

impl RoundEntry {
    pub const fn unset(player_id: PlayerId) -> Self {
        Self {
            player_id,
            call: None,
            scored: None,
        }
    }
}

/// A finalized entry with its computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_id: PlayerId,
    pub call: u8,
    pub scored: u8,
    pub round_score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedRound {
    /// 1-based.
    pub round_no: u16,
    pub results: Vec<RoundResult>,
}

/// The round currently being entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundState {
    /// Exactly one entry per active player, in player order.
    pub entries: Vec<RoundEntry>,
    pub calls_locked: bool,
}

impl RoundState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_players(players: &[Player]) -> Self {
        Self {
            entries: players.iter().map(|p| RoundEntry::unset(p.id)).collect(),
            calls_locked: false,
        }
    }

    pub fn entry(&self, player_id: PlayerId) -> Option<&RoundEntry> {
        self.entries.iter().find(|e| e.player_id == player_id)
    }

    /// Sum of entered calls; unset calls count as zero.
    pub fn total_calls(&self) -> u16 {
        self.entries.iter().map(|e| e.call.unwrap_or(0) as u16).sum()
    }

    /// Sum of entered scored values; unset values count as zero.
    pub fn total_scored(&self) -> u16 {
        self.entries.iter().map(|e| e.scored.unwrap_or(0) as u16).sum()
    }
}

/// Entire scorekeeping session. Transitions live in `domain::session` and
/// always produce a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) phase: Phase,
    pub(crate) config: GameConfig,
    /// Active players, sorted by id.
    pub(crate) players: Vec<Player>,
    pub(crate) round: RoundState,
    /// Append-only while playing; cleared by reset.
    pub(crate) history: Vec<CompletedRound>,
    pub(crate) winner: Option<PlayerId>,
}

impl GameSession {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn total_leads(&self) -> u8 {
        self.config.total_leads
    }

    pub fn winning_score(&self) -> i32 {
        self.config.winning_score
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn calls_locked(&self) -> bool {
        self.round.calls_locked
    }

    pub fn history(&self) -> &[CompletedRound] {
        &self.history
    }

    /// Completed rounds, saturating at `u16::MAX`.
    pub fn rounds_played(&self) -> u16 {
        u16::try_from(self.history.len()).unwrap_or(u16::MAX)
    }

    /// Number of the round being entered (1-based).
    pub fn round_no(&self) -> u16 {
        self.rounds_played().saturating_add(1)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Cards dealt per round with the current selection.
    pub fn total_cards(&self) -> u16 {
        self.players.len() as u16 * self.config.total_leads as u16
    }
}
