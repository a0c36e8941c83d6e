use tracing::{debug, info};

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::state::{GameSession, PlayerId};
use crate::error::AppError;

impl GameFlowService {
    pub fn toggle_player(
        &self,
        session: &GameSession,
        player_id: PlayerId,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(player_id, "Toggling player selection");
        let result = self.run_mutation(session, "toggle_player", |s| s.toggle_player(player_id))?;
        debug!(
            players = result.session.players().len(),
            total_leads = result.session.total_leads(),
            "Player selection updated"
        );
        Ok(result)
    }

    pub fn rename_player(
        &self,
        session: &GameSession,
        player_id: PlayerId,
        name: &str,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(player_id, "Renaming player");
        self.run_mutation(session, "rename_player", |s| s.rename_player(player_id, name))
    }

    pub fn set_total_leads(
        &self,
        session: &GameSession,
        total_leads: i32,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(requested = total_leads, "Setting leads per round");
        self.run_mutation(session, "set_total_leads", |s| s.set_total_leads(total_leads))
    }

    pub fn set_winning_score(
        &self,
        session: &GameSession,
        winning_score: i32,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(requested = winning_score, "Setting winning score");
        self.run_mutation(session, "set_winning_score", |s| {
            s.set_winning_score(winning_score)
        })
    }

    pub fn step_total_leads(
        &self,
        session: &GameSession,
        delta: i32,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(delta, "Stepping leads per round");
        self.run_mutation(session, "step_total_leads", |s| s.step_total_leads(delta))
    }

    pub fn step_winning_score(
        &self,
        session: &GameSession,
        delta: i32,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(delta, "Stepping winning score");
        self.run_mutation(session, "step_winning_score", |s| s.step_winning_score(delta))
    }

    pub fn start_game(&self, session: &GameSession) -> Result<GameFlowMutationResult, AppError> {
        let result = self.run_mutation(session, "start_game", GameSession::start_game)?;
        info!(
            players = result.session.players().len(),
            total_leads = result.session.total_leads(),
            winning_score = result.session.winning_score(),
            "Game started"
        );
        Ok(result)
    }
}
