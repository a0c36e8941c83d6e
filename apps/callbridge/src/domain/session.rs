//! Session transitions.
//!
//! Every transition borrows the current session and returns a new one, or an
//! error with the current session untouched.

use crate::config::GameConfig;
use crate::domain::entry::{clamp_call, clamp_scored, parse_entry_input, EntryField};
use crate::domain::players::{
    preset_player, sanitize_name, standings, validate_names, validate_player_count,
    DEFAULT_SELECTION,
};
use crate::domain::rules::{
    clamp_total_leads, clamp_winning_score, max_total_leads, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::domain::state::{
    CompletedRound, GameSession, Phase, Player, PlayerId, RoundEntry, RoundState,
};
use crate::domain::validation::{validate_and_commit_round, validate_call_lock};
use crate::errors::domain::{DomainError, ValidationKind};

impl Default for GameSession {
    fn default() -> Self {
        Self::fresh(GameConfig::default())
    }
}

impl GameSession {
    /// A setup-phase session with the default players and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A setup-phase session with the default players and `config`.
    pub fn with_config(config: GameConfig) -> Result<Self, DomainError> {
        config.validate(DEFAULT_SELECTION.len())?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        let players: Vec<Player> = DEFAULT_SELECTION
            .iter()
            .filter_map(|&id| preset_player(id))
            .collect();
        let config = GameConfig {
            total_leads: clamp_total_leads(config.total_leads as i32, players.len()),
            winning_score: clamp_winning_score(config.winning_score),
            ..config
        };
        Self {
            phase: Phase::Setup,
            config,
            players,
            round: RoundState::empty(),
            history: Vec::new(),
            winner: None,
        }
    }

    /// Players ranked by total, highest first.
    pub fn standings(&self) -> Vec<&Player> {
        standings(&self.players)
    }

    fn require_phase(&self, expected: Phase, action: &str) -> Result<(), DomainError> {
        if self.phase != expected {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Cannot {action} during {:?} (expected {expected:?})", self.phase),
            ));
        }
        Ok(())
    }

    fn require_active(&self, player_id: PlayerId) -> Result<usize, DomainError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| DomainError::player_not_found(player_id))
    }

    // Setup

    /// Add a roster player to the selection, or remove an active one.
    ///
    /// The lead count is clamped down if the new player count needs it.
    pub fn toggle_player(&self, player_id: PlayerId) -> Result<Self, DomainError> {
        self.require_phase(Phase::Setup, "change players")?;
        let mut next = self.clone();

        if let Some(idx) = self.players.iter().position(|p| p.id == player_id) {
            if self.players.len() <= MIN_PLAYERS {
                return Err(DomainError::validation(
                    ValidationKind::TooFewPlayers,
                    format!("You need at least {MIN_PLAYERS} players"),
                ));
            }
            next.players.remove(idx);
        } else {
            let player =
                preset_player(player_id).ok_or_else(|| DomainError::player_not_found(player_id))?;
            if self.players.len() >= MAX_PLAYERS {
                return Err(DomainError::validation(
                    ValidationKind::TooManyPlayers,
                    format!("Maximum {MAX_PLAYERS} players allowed"),
                ));
            }
            let at = next.players.partition_point(|p| p.id < player_id);
            next.players.insert(at, player);
        }

        let max_leads = max_total_leads(next.players.len());
        if next.config.total_leads > max_leads {
            next.config.total_leads = max_leads;
        }
        Ok(next)
    }

    /// Replace an active player's name with the sanitized form of `raw`.
    ///
    /// An empty result is allowed here; `start_game` rejects it.
    pub fn rename_player(&self, player_id: PlayerId, raw: &str) -> Result<Self, DomainError> {
        self.require_phase(Phase::Setup, "rename players")?;
        let idx = self.require_active(player_id)?;
        let mut next = self.clone();
        next.players[idx].name = sanitize_name(raw);
        Ok(next)
    }

    pub fn set_total_leads(&self, requested: i32) -> Result<Self, DomainError> {
        self.require_phase(Phase::Setup, "change leads per round")?;
        let mut next = self.clone();
        next.config.total_leads = clamp_total_leads(requested, self.players.len());
        Ok(next)
    }

    pub fn step_total_leads(&self, delta: i32) -> Result<Self, DomainError> {
        self.set_total_leads((self.config.total_leads as i32).saturating_add(delta))
    }

    pub fn set_winning_score(&self, requested: i32) -> Result<Self, DomainError> {
        self.require_phase(Phase::Setup, "change the winning score")?;
        let mut next = self.clone();
        next.config.winning_score = clamp_winning_score(requested);
        Ok(next)
    }

    pub fn step_winning_score(&self, delta: i32) -> Result<Self, DomainError> {
        self.set_winning_score(self.config.winning_score.saturating_add(delta))
    }

    /// Leave setup: checks composition, names and configuration, then opens
    /// the first round.
    pub fn start_game(&self) -> Result<Self, DomainError> {
        self.require_phase(Phase::Setup, "start the game")?;
        validate_player_count(self.players.len())?;
        validate_names(&self.players)?;
        self.config.validate(self.players.len())?;

        let mut next = self.clone();
        next.phase = Phase::Playing;
        next.round = RoundState::for_players(&next.players);
        Ok(next)
    }

    // Playing

    fn require_editable(&self, field: EntryField) -> Result<(), DomainError> {
        self.require_phase(Phase::Playing, "edit round values")?;
        match (field, self.round.calls_locked) {
            (EntryField::Call, true) => Err(DomainError::validation(
                ValidationKind::CallsLocked,
                "Calls are locked for this round",
            )),
            (EntryField::Scored, false) => Err(DomainError::validation(
                ValidationKind::CallsNotLocked,
                "Lock calls before entering scored leads",
            )),
            _ => Ok(()),
        }
    }

    fn entry_index(&self, player_id: PlayerId) -> Result<usize, DomainError> {
        self.round
            .entries
            .iter()
            .position(|e| e.player_id == player_id)
            .ok_or_else(|| DomainError::player_not_found(player_id))
    }

    /// Set `field` for `player_id` to `requested`, clamped to the field's cap.
    pub fn set_value(
        &self,
        player_id: PlayerId,
        field: EntryField,
        requested: i32,
    ) -> Result<Self, DomainError> {
        self.require_editable(field)?;
        let idx = self.entry_index(player_id)?;
        let total_leads = self.config.total_leads;

        let mut next = self.clone();
        let entry: &mut RoundEntry = &mut next.round.entries[idx];
        match field {
            EntryField::Call => entry.call = Some(clamp_call(requested, total_leads)),
            EntryField::Scored => {
                entry.scored = Some(clamp_scored(
                    requested,
                    &self.round.entries,
                    player_id,
                    total_leads,
                    self.config.scored_cap,
                ))
            }
        }
        Ok(next)
    }

    /// Move `field` by `delta` from its current value; an unset value counts as 0.
    pub fn adjust_value(
        &self,
        player_id: PlayerId,
        field: EntryField,
        delta: i32,
    ) -> Result<Self, DomainError> {
        self.require_editable(field)?;
        let idx = self.entry_index(player_id)?;
        let entry = &self.round.entries[idx];
        let current = match field {
            EntryField::Call => entry.call,
            EntryField::Scored => entry.scored,
        }
        .unwrap_or(0) as i32;
        self.set_value(player_id, field, current.saturating_add(delta))
    }

    /// Set `field` from text typed into the entry box.
    pub fn set_value_from_input(
        &self,
        player_id: PlayerId,
        field: EntryField,
        raw: &str,
    ) -> Result<Self, DomainError> {
        self.set_value(player_id, field, parse_entry_input(raw))
    }

    /// Freeze calls once their total is inside the call band.
    pub fn lock_calls(&self) -> Result<Self, DomainError> {
        self.require_phase(Phase::Playing, "lock calls")?;
        if self.round.calls_locked {
            return Err(DomainError::validation(
                ValidationKind::CallsLocked,
                "Calls are already locked",
            ));
        }
        validate_call_lock(&self.round.entries, self.config.total_leads)?;

        let mut next = self.clone();
        next.round.calls_locked = true;
        Ok(next)
    }

    /// Score the round, add it to every total and the history, then either
    /// finish the game or open the next round.
    ///
    /// The winner is the first player, in player order, whose total reached
    /// the winning score.
    pub fn submit_round(&self) -> Result<Self, DomainError> {
        self.require_phase(Phase::Playing, "submit a round")?;
        let results = validate_and_commit_round(
            &self.round.entries,
            self.config.total_leads,
            self.round.calls_locked,
            self.config.scored_cap,
        )?;

        let mut next = self.clone();
        for player in &mut next.players {
            if let Some(result) = results.iter().find(|r| r.player_id == player.id) {
                player.total_score += result.round_score;
            }
        }
        next.history.push(CompletedRound {
            round_no: self.round_no(),
            results,
        });

        next.winner = next
            .players
            .iter()
            .find(|p| p.total_score >= next.config.winning_score)
            .map(|p| p.id);
        if next.winner.is_some() {
            next.phase = Phase::Finished;
            next.round = RoundState::empty();
        } else {
            next.round = RoundState::for_players(&next.players);
        }
        Ok(next)
    }

    // Any phase

    /// Back to setup with zeroed totals and no history. Selection, names and
    /// configuration are kept.
    pub fn reset(&self) -> Self {
        let mut next = self.clone();
        next.phase = Phase::Setup;
        for player in &mut next.players {
            player.total_score = 0;
        }
        next.round = RoundState::empty();
        next.history.clear();
        next.winner = None;
        next
    }
}
