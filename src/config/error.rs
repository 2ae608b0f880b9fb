//! Errors from reading, parsing and writing the `kbl` config file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A config file problem, always tied to the file it concerns.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read config {}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the schema. `line` and `column` are
    /// one-based, or 0 when toml reports no position.
    #[error("bad config {}:{line}:{column}: {message}", path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Line of the offending token.
        line: usize,
        /// Column of the offending token.
        column: usize,
        /// What toml objected to.
        message: String,
    },

    /// `--config` named a file that does not exist.
    #[error("no config file at {}", path.display())]
    Missing {
        /// Requested path.
        path: PathBuf,
    },

    /// `config init` without `--force` found a file in place.
    #[error("config {} already exists (pass --force to replace it)", path.display())]
    Exists {
        /// Existing file.
        path: PathBuf,
    },

    /// Writing (or backing up) the file failed.
    #[error("cannot write config {}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Missing { path }
            | ConfigError::Exists { path }
            | ConfigError::Write { path, .. } => path,
        }
    }
}
