//! Tracing subscriber setup
//!
//! Logs go to stderr so they never interleave with panel output on stdout.
//! `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
