//! TOML configuration schema for `kbl`.
//!
//! Every section derives `Deserialize`/`Serialize` with `#[serde(default)]`,
//! so an empty file is a valid configuration.

use keybase_local::Settings;
use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// ```toml
/// [keybase]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// How to reach the local Keybase client.
    pub keybase: Settings,
    /// Diagnostic output.
    pub log: LogConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Level used when `KBL_LOG` is not set.
    pub level: LogLevel,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Every subprocess call.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
