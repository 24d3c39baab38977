//! Logging setup for the `shiftmatch` binary.
//!
//! Engine crates log through the `log` facade. The subscriber installed here
//! bridges those records and writes them to stderr, leaving stdout for the
//! JSON ranking.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global `fmt` subscriber.
///
/// # Errors
/// Returns [`CliError::Telemetry`] when a global subscriber is already set.
pub fn init() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::Telemetry)
}
