use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_directive`; `json` switches the fmt layer to
/// one JSON object per line.
pub fn init_tracing(default_directive: &str, json: bool) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry.with(base.with_ansi(false).json()).try_init()
    } else {
        registry.with(base).try_init()
    };
    result.map_err(|e| AppError::config(format!("tracing init failed: {e}")))
}
