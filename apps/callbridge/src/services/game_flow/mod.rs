//! Game flow orchestration service - bridges the UI shell's actions with the
//! pure domain transitions.
//!
//! Every action is processed to completion against the session it is given and
//! returns the next session plus the lifecycle transitions it caused. Rejected
//! actions leave the caller's session as it was.

mod actions;
mod mutation;
mod round_lifecycle;
mod setup;

/// Game flow service. Stateless; the shell owns the session.
#[derive(Debug, Default)]
pub struct GameFlowService;

pub use actions::SessionAction;
pub use mutation::GameFlowMutationResult;
