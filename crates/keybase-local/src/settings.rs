//! Where to find the Keybase client on this machine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default program name of the Keybase CLI.
pub const DEFAULT_BINARY: &str = "keybase";

/// Process name of the Keybase daemon.
pub const DEFAULT_DAEMON_PROCESS: &str = "keybase";

/// Process name of the KBFS filesystem companion.
#[cfg(windows)]
pub const DEFAULT_KBFS_PROCESS: &str = "kbfsdokan";
/// Process name of the KBFS filesystem companion.
#[cfg(not(windows))]
pub const DEFAULT_KBFS_PROCESS: &str = "kbfsfuse";

/// Where KBFS is mounted by default.
#[cfg(windows)]
pub const DEFAULT_KBFS_MOUNT: &str = "K:\\";
/// Where KBFS is mounted by default.
#[cfg(not(windows))]
pub const DEFAULT_KBFS_MOUNT: &str = "/keybase";

/// Locations and process names used to reach the local Keybase client.
///
/// Every field has a default, so a partial TOML table deserializes cleanly:
/// ```toml
/// [keybase]
/// binary = "/usr/local/bin/keybase"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Keybase CLI to execute (a bare name is looked up on `PATH`).
    pub binary: PathBuf,
    /// Process name that identifies a running daemon.
    pub daemon_process: String,
    /// Process name that identifies a running KBFS companion.
    pub kbfs_process: String,
    /// KBFS mount point.
    pub kbfs_mount: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            daemon_process: DEFAULT_DAEMON_PROCESS.to_string(),
            kbfs_process: DEFAULT_KBFS_PROCESS.to_string(),
            kbfs_mount: PathBuf::from(DEFAULT_KBFS_MOUNT),
        }
    }
}
