//! Structured logging.
//!
//! Diagnostics go to stderr through `tracing` so they never mix with the
//! prompts written to stdout.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize logging with a filter directive such as `warn` or `debug`.
///
/// Only the first call installs a subscriber. An unparsable directive falls
/// back to `warn`.
pub fn init_with_filter(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
