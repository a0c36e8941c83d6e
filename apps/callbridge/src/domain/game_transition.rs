use serde::{Deserialize, Serialize};

use crate::domain::state::{GameSession, Phase, PlayerId};

/// The lifecycle facts transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: Phase,
    pub calls_locked: bool,
    pub rounds_played: u16,
    pub winner: Option<PlayerId>,
}

impl GameLifecycleView {
    pub fn of(session: &GameSession) -> Self {
        Self {
            phase: session.phase(),
            calls_locked: session.calls_locked(),
            rounds_played: session.rounds_played(),
            winner: session.winner().map(|p| p.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: Setup -> Playing
    GameStarted,

    /// Edge-triggered: calls went from open to locked
    CallsLocked,

    /// Edge-triggered: a round was appended to history
    RoundCommitted { round_no: u16 },

    /// Edge-triggered: Playing -> Finished
    GameEnded { winner: Option<PlayerId> },

    /// Edge-triggered: back to Setup from a started game
    GameReset,
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Game start
    if before.phase == Phase::Setup && after.phase == Phase::Playing {
        transitions.push(GameTransition::GameStarted);
    }

    // 2. Lock within the same round
    if !before.calls_locked && after.calls_locked && before.rounds_played == after.rounds_played {
        transitions.push(GameTransition::CallsLocked);
    }

    // 3. Commit
    if after.rounds_played > before.rounds_played {
        transitions.push(GameTransition::RoundCommitted {
            round_no: after.rounds_played,
        });
    }

    // 4. Game end
    if before.phase != Phase::Finished && after.phase == Phase::Finished {
        transitions.push(GameTransition::GameEnded {
            winner: after.winner,
        });
    }

    // 5. Reset
    if before.phase != Phase::Setup && after.phase == Phase::Setup {
        transitions.push(GameTransition::GameReset);
    }

    transitions
}
