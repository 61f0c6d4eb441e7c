//! Diagnostic logging.
//!
//! Events go to stderr through `tracing_subscriber`, filtered by
//! `RUST_LOG`.  By default only warnings from this crate are shown.
//! Secret values, passwords and keys are never logged.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "passvault=warn";

/// Install the global subscriber.  Safe to call more than once.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
