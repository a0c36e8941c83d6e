//! Domain layer: pure scoring rules, validation gates and session transitions.

pub mod entry;
pub mod game_transition;
pub mod history;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod tests_entry;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use entry::{EntryField, ScoredCapPolicy};
pub use rules::{call_band, max_total_leads, scoring_examples};
pub use scoring::compute_round_score;
pub use state::{CompletedRound, GameSession, Phase, Player, PlayerId, RoundEntry, RoundResult};
pub use validation::{validate_and_commit_round, validate_call_lock};
