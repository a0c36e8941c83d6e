use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` if set, otherwise `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber for the embedding shell. Fails if a global
/// subscriber is already set.
pub fn init_tracing() -> Result<(), AppError> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::config(format!("tracing already initialized: {e}")))
}
