//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "warn";

/// Filter used by `--debug`
const DEBUG_FILTER: &str = "husky=debug";

/// Build the log filter for this run.
///
/// `--debug` wins over `RUST_LOG`, which wins over the default.
#[must_use]
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber writing to stderr
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
