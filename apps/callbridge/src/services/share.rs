//! Handing the victory summary to whatever share targets the platform offers.
//!
//! Targets are tried in order. A target that is not available on this
//! platform passes to the next one; the first available target decides the
//! outcome. A user cancelling the share is not an error.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::state::GameSession;
use crate::domain::summary::{VictorySummary, SHARE_TITLE};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("share target not available")]
    Unsupported,
    #[error("share cancelled by user")]
    Aborted,
    #[error("share failed: {0}")]
    Failed(String),
}

/// A platform share facility (native share sheet, clipboard, ...).
pub trait ShareSink {
    /// Short label used in logs and outcomes.
    fn name(&self) -> &'static str;

    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Delivered { via: &'static str },
    /// The user dismissed the share; nothing to report.
    Cancelled,
}

/// Share the result of a finished session through the first available sink.
pub fn share_victory(
    session: &GameSession,
    sinks: &mut [&mut dyn ShareSink],
) -> Result<ShareOutcome, AppError> {
    let summary = VictorySummary::from_session(session).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Results can only be shared once the game is finished",
        )
    })?;
    let text = summary.share_text();

    for sink in sinks.iter_mut() {
        match sink.share(SHARE_TITLE, &text) {
            Ok(()) => {
                info!(via = sink.name(), winner = %summary.winner.name, "Victory shared");
                return Ok(ShareOutcome::Delivered { via: sink.name() });
            }
            Err(ShareError::Unsupported) => {
                debug!(via = sink.name(), "Share target unavailable, trying next");
            }
            Err(ShareError::Aborted) => {
                debug!(via = sink.name(), "Share cancelled");
                return Ok(ShareOutcome::Cancelled);
            }
            Err(ShareError::Failed(detail)) => {
                warn!(via = sink.name(), %detail, "Share failed");
                return Err(AppError::share(
                    "Unable to share. Please screenshot the results to share.",
                ));
            }
        }
    }

    warn!("No share target available");
    Err(AppError::share(
        "Unable to copy. Please screenshot the results to share.",
    ))
}
