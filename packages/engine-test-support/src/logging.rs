//! Tracing setup for engine tests.
//!
//! The engine's unit tests and every `apps/engine/tests` binary call
//! [`init`] from a `ctor` hook, so domain `debug!`/`info!` output is visible
//! on demand without each test wiring a subscriber.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process.
///
/// Filter: `TEST_LOG`, else `RUST_LOG`, else `warn`. Round starts and
/// scoring log at `info`, each bid and card at `debug`:
///
/// ```bash
/// TEST_LOG=engine=debug cargo test -p engine --test game_flow_end_to_end_test
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber may already be installed by the test harness.
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
