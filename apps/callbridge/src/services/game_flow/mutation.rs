use tracing::{debug, info};

use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::state::GameSession;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::services::game_flow::GameFlowService;

#[derive(Debug)]
pub struct GameFlowMutationResult {
    pub session: GameSession,
    pub transitions: Vec<GameTransition>,
}

impl GameFlowMutationResult {
    pub fn into_session(self) -> GameSession {
        self.session
    }
}

impl GameFlowService {
    /// Apply one domain transition and report what changed in the lifecycle.
    pub fn run_mutation<F>(
        &self,
        session: &GameSession,
        action: &'static str,
        mutation: F,
    ) -> Result<GameFlowMutationResult, AppError>
    where
        F: FnOnce(&GameSession) -> Result<GameSession, DomainError>,
    {
        let before = GameLifecycleView::of(session);

        let next = mutation(session).map_err(|err| {
            debug!(action, error = %err, "Action rejected");
            AppError::from(err)
        })?;

        let after = GameLifecycleView::of(&next);
        let transitions = derive_game_transitions(&before, &after);
        for transition in &transitions {
            info!(action, ?transition, "Session transition");
        }

        Ok(GameFlowMutationResult {
            session: next,
            transitions,
        })
    }
}
