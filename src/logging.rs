//! Logging initialization for `kbl`.
//!
//! Configures the `tracing` subscriber with level filtering via the `KBL_LOG`
//! environment variable. Falls back to the level from the config file (`warn`
//! unless changed) when the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Show every keybase invocation
//! KBL_LOG=debug kbl chat list
//!
//! # Library only
//! KBL_LOG=keybase_local=trace,warn kbl team list-memberships
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "KBL_LOG";

/// Builds the filter: `KBL_LOG` if it parses, otherwise `fallback`.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Output goes to stderr so stdout stays clean for JSON results.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (call once, at startup).
pub fn init(fallback: LogLevel) {
    fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
