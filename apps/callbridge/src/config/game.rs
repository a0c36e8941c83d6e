//! Game configuration chosen on the setup screen.
//!
//! The shell may build this directly or deserialize it; missing fields fall
//! back to the defaults (13 leads, winning score 15, scored cap tied to the
//! lead count).

use serde::{Deserialize, Serialize};

use crate::domain::entry::ScoredCapPolicy;
use crate::domain::rules::{
    max_total_leads, DEFAULT_TOTAL_LEADS, DEFAULT_WINNING_SCORE, WINNING_SCORE_RANGE,
};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tricks contested per round.
    pub total_leads: u8,
    /// The game ends once any total reaches this.
    pub winning_score: i32,
    pub scored_cap: ScoredCapPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_leads: DEFAULT_TOTAL_LEADS,
            winning_score: DEFAULT_WINNING_SCORE,
            scored_cap: ScoredCapPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Check the configuration against the number of players it will be used with.
    pub fn validate(&self, player_count: usize) -> Result<(), DomainError> {
        let max_leads = max_total_leads(player_count);
        if self.total_leads == 0 || self.total_leads > max_leads {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "Leads per round must be between 1 and {max_leads} for {player_count} players"
                ),
            ));
        }
        if !WINNING_SCORE_RANGE.contains(&self.winning_score) {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "Winning score must be between {} and {}",
                    WINNING_SCORE_RANGE.start(),
                    WINNING_SCORE_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}
