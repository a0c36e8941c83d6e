use tracing::{debug, info};

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::entry::EntryField;
use crate::domain::state::{GameSession, PlayerId};
use crate::error::AppError;

impl GameFlowService {
    pub fn adjust_value(
        &self,
        session: &GameSession,
        player_id: PlayerId,
        field: EntryField,
        delta: i32,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(player_id, ?field, delta, "Adjusting round value");
        self.run_mutation(session, "adjust_value", |s| {
            s.adjust_value(player_id, field, delta)
        })
    }

    pub fn set_value(
        &self,
        session: &GameSession,
        player_id: PlayerId,
        field: EntryField,
        value: i32,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(player_id, ?field, value, "Setting round value");
        self.run_mutation(session, "set_value", |s| s.set_value(player_id, field, value))
    }

    pub fn input_value(
        &self,
        session: &GameSession,
        player_id: PlayerId,
        field: EntryField,
        raw: &str,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(player_id, ?field, raw, "Setting round value from input");
        self.run_mutation(session, "input_value", |s| {
            s.set_value_from_input(player_id, field, raw)
        })
    }

    /// Lock calls for the current round.
    pub fn lock_calls(&self, session: &GameSession) -> Result<GameFlowMutationResult, AppError> {
        let round_no = session.round_no();
        let total_calls = session.round().total_calls();
        debug!(round_no, total_calls, "Locking calls");

        let result = self.run_mutation(session, "lock_calls", GameSession::lock_calls)?;
        info!(round_no, total_calls, "Calls locked");
        Ok(result)
    }

    /// Score and commit the current round.
    pub fn submit_round(&self, session: &GameSession) -> Result<GameFlowMutationResult, AppError> {
        let round_no = session.round_no();
        info!(round_no, "Submitting round");

        let result = self.run_mutation(session, "submit_round", GameSession::submit_round)?;

        if let Some(committed) = result.session.history().last() {
            for r in &committed.results {
                debug!(
                    round_no,
                    player_id = r.player_id,
                    call = r.call,
                    scored = r.scored,
                    round_score = r.round_score,
                    "Round scored"
                );
            }
        }
        match result.session.winner() {
            Some(winner) => info!(
                round_no,
                winner = %winner.name,
                total_score = winner.total_score,
                "Game finished"
            ),
            None => debug!(next_round = result.session.round_no(), "Transition: -> next round"),
        }
        Ok(result)
    }

    pub fn reset(&self, session: &GameSession) -> Result<GameFlowMutationResult, AppError> {
        info!(rounds_played = session.rounds_played(), "Resetting game");
        self.run_mutation(session, "reset", |s| Ok(s.reset()))
    }
}
