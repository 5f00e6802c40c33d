//! Logging configuration.
//!
//! Logs go to stderr so stdout stays clean for one-shot query output.

use tracing_subscriber::EnvFilter;

/// Initializes logging with the standard env-filter setup.
///
/// Respects `RUST_LOG`; defaults to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
