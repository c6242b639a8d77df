//! Log setup
//!
//! Diagnostics go to stderr so they never interleave with the report on
//! stdout. `RUST_LOG` overrides the verbosity-derived filter.

use crate::cli::Verbosity;
use tracing_subscriber::EnvFilter;

/// Build the filter for a verbosity level
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
