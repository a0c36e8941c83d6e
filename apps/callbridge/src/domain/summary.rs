//! End-of-game summary and the text handed to the platform share facility.

use serde::{Deserialize, Serialize};

use crate::domain::players::standings;
use crate::domain::state::{GameSession, Phase, Player, PlayerId};

pub const SHARE_TITLE: &str = "Call Bridge Victory!";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    /// 1-based position in the standings.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub total_score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictorySummary {
    /// Top of the final standings. This can differ from
    /// `GameSession::winner()`, which is the first player in player order to
    /// reach the winning score.
    pub winner: RankedPlayer,
    pub rankings: Vec<RankedPlayer>,
}

/// Standings with their positions. Equal totals keep player order and still
/// take consecutive ranks.
pub fn ranked_players(players: &[Player]) -> Vec<RankedPlayer> {
    standings(players)
        .into_iter()
        .enumerate()
        .map(|(idx, p)| RankedPlayer {
            rank: idx + 1,
            player_id: p.id,
            name: p.name.clone(),
            total_score: p.total_score,
        })
        .collect()
}

impl VictorySummary {
    /// Summary of a finished session; `None` while the game is still open.
    ///
    /// The headline player is the top of the standings.
    pub fn from_session(session: &GameSession) -> Option<Self> {
        if session.phase() != Phase::Finished {
            return None;
        }
        let rankings = ranked_players(session.players());
        let winner = rankings.first()?.clone();
        Some(Self { winner, rankings })
    }

    pub fn share_text(&self) -> String {
        let mut text = format!(
            "🏆 {SHARE_TITLE}\n\nWinner: {}\nScore: {} points\n\n📊 Final Rankings:",
            self.winner.name, self.winner.total_score
        );
        for ranked in &self.rankings {
            text.push_str(&format!(
                "\n#{} {}: {} pts",
                ranked.rank, ranked.name, ranked.total_score
            ));
        }
        text
    }
}
