use serde::{Deserialize, Serialize};

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::entry::EntryField;
use crate::domain::state::{GameSession, PlayerId};
use crate::error::AppError;

/// Every user action the shell can send, one per discrete transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    TogglePlayer {
        player_id: PlayerId,
    },
    RenamePlayer {
        player_id: PlayerId,
        name: String,
    },
    SetTotalLeads {
        total_leads: i32,
    },
    StepTotalLeads {
        delta: i32,
    },
    SetWinningScore {
        winning_score: i32,
    },
    StepWinningScore {
        delta: i32,
    },
    StartGame,
    AdjustValue {
        player_id: PlayerId,
        field: EntryField,
        delta: i32,
    },
    SetValue {
        player_id: PlayerId,
        field: EntryField,
        value: i32,
    },
    InputValue {
        player_id: PlayerId,
        field: EntryField,
        raw: String,
    },
    LockCalls,
    SubmitRound,
    Reset,
}

impl GameFlowService {
    /// Process one action to completion.
    pub fn apply(
        &self,
        session: &GameSession,
        action: &SessionAction,
    ) -> Result<GameFlowMutationResult, AppError> {
        match action {
            SessionAction::TogglePlayer { player_id } => self.toggle_player(session, *player_id),
            SessionAction::RenamePlayer { player_id, name } => {
                self.rename_player(session, *player_id, name)
            }
            SessionAction::SetTotalLeads { total_leads } => {
                self.set_total_leads(session, *total_leads)
            }
            SessionAction::StepTotalLeads { delta } => self.step_total_leads(session, *delta),
            SessionAction::SetWinningScore { winning_score } => {
                self.set_winning_score(session, *winning_score)
            }
            SessionAction::StepWinningScore { delta } => self.step_winning_score(session, *delta),
            SessionAction::StartGame => self.start_game(session),
            SessionAction::AdjustValue {
                player_id,
                field,
                delta,
            } => self.adjust_value(session, *player_id, *field, *delta),
            SessionAction::SetValue {
                player_id,
                field,
                value,
            } => self.set_value(session, *player_id, *field, *value),
            SessionAction::InputValue {
                player_id,
                field,
                raw,
            } => self.input_value(session, *player_id, *field, raw),
            SessionAction::LockCalls => self.lock_calls(session),
            SessionAction::SubmitRound => self.submit_round(session),
            SessionAction::Reset => self.reset(session),
        }
    }
}
