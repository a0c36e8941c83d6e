#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Call Bridge score keeper core: round scoring, validation gates and the
//! session model driven by a UI shell.

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    compute_round_score, validate_and_commit_round, validate_call_lock, EntryField, GameSession,
    Phase, ScoredCapPolicy,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::game_flow::{GameFlowMutationResult, GameFlowService, SessionAction};
pub use services::share::{share_victory, ShareError, ShareOutcome, ShareSink};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
