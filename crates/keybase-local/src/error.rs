//! Error types for the keybase-local crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by every operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The Keybase binary could not be found.
    #[error("keybase needs to be installed (could not execute {})", program.display())]
    NotInstalled {
        /// Program that was looked up.
        program: PathBuf,
    },

    /// No Keybase daemon process is running.
    #[error("keybase needs to be running")]
    NotRunning,

    /// The daemon is running but nobody is logged in.
    #[error("keybase needs a logged-in user")]
    NotLoggedIn,

    /// KBFS is not mounted at the configured mount point.
    #[error("KBFS needs to be enabled and running")]
    KbfsNotRunning,

    /// The chat API answered with an error envelope.
    ///
    /// Carries the daemon's message text verbatim.
    #[error("{0}")]
    Chat(String),

    /// A command exited unsuccessfully.
    #[error("`{command}` failed with status {}: {stderr}", code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    CommandFailed {
        /// Command line that was run.
        command: String,
        /// Exit code (None if terminated by signal).
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// A team name does not follow Keybase's naming rules.
    #[error("Invalid team name: {0:?}")]
    InvalidTeamName(String),

    /// An exploding-message lifetime is not a valid duration.
    #[error("Invalid exploding lifetime {lifetime:?}")]
    InvalidLifetime {
        /// Lifetime as given by the caller.
        lifetime: String,
        /// Parser error.
        #[source]
        source: humantime::DurationError,
    },

    /// A command produced output in a shape we do not understand.
    #[error("Unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput {
        /// Command line that was run.
        command: String,
        /// The offending output.
        output: String,
    },

    /// Failed to spawn or talk to a child process.
    #[error("Failed to run {}", program.display())]
    Spawn {
        /// Program being run.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error reading a file.
    #[error("Failed to read {}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for keybase-local operations.
pub type Result<T> = std::result::Result<T, Error>;
