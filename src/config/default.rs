//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! a function to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs` on Linux
/// and macOS.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# keybase-local configuration
#
# All values shown below are the built-in defaults.
# Location: $XDG_CONFIG_HOME/keybase-local/config.toml

# ==============================================================================
# Keybase client
# ==============================================================================

[keybase]

# The Keybase command-line program. A bare name is looked up on PATH.
# Tilde (~) is expanded to the user's home directory.
binary = "keybase"

# Process name that shows the Keybase service is running.
daemon_process = "keybase"

# Process name of the KBFS filesystem companion.
kbfs_process = "kbfsfuse"

# Where KBFS is mounted. The hidden .kbfs_status file at this path is used to
# tell a live mount from an empty directory.
kbfs_mount = "/keybase"

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Verbosity when KBL_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
#   debug - every keybase invocation is logged
level = "warn"
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::Exists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::Exists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::Write {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    xdg::ensure_config_dir().map_err(write_error)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
