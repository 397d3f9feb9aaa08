//! Diagnostic output
//!
//! The orchestrator reports through `tracing`. Drivers that want the
//! `** verifying ...` lines on stderr call [`init_stderr_logging`] once.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// Honours `RUST_LOG`; defaults to `info`. Safe to call more than once,
/// and a no-op if another global subscriber is already set.
pub fn init_stderr_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
