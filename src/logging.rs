//! Diagnostic logging setup
//!
//! Status lines are not logs; they go through [`crate::output::Printer`].
//! This subscriber only carries `tracing` events and writes them to stderr.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber for this run
///
/// The filter comes from the configuration alone, never from the environment.
/// Later calls are no-ops.
pub fn init(config: &Config) {
    let filter = EnvFilter::new(config.log_filter());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
