#![forbid(unsafe_code)]

//! Stderr logging for hosts without their own subscriber.

use tracing_subscriber::EnvFilter;

/// Variable holding the filter directives, e.g. `radarviz_overlay=debug`.
pub const LOG_ENV: &str = "RADARVIZ_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Install a global fmt subscriber filtered by `RADARVIZ_LOG`.
///
/// Returns `false` when a global subscriber was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
