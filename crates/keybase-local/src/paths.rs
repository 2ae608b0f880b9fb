//! Platform-aware location of the Keybase client's own configuration.
//!
//! - **Windows**: `%LOCALAPPDATA%\Keybase`
//! - **macOS**: `~/Library/Application Support/Keybase`
//! - **Linux and others**: `$XDG_CONFIG_HOME/keybase` or `~/.config/keybase`

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// File name of the client configuration inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Returns the Keybase configuration directory.
///
/// Falls back to a relative path if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Keybase")
    }
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("Library/Application Support"))
            .join("Keybase")
    }
    #[cfg(not(any(windows, target_os = "macos")))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return PathBuf::from(xdg).join("keybase");
            }
        }
        dirs::home_dir()
            .map(|home| home.join(".config"))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("keybase")
    }
}

/// Returns the path of the Keybase configuration file.
///
/// The file is not guaranteed to exist on disk.
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Reads and parses the Keybase configuration file.
pub fn read_config() -> Result<serde_json::Value> {
    let path = config_file();
    let content = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!("Read keybase config from {:?}", path);
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_inside_config_dir() {
        let file = config_file();
        assert_eq!(file.parent(), Some(config_dir().as_path()));
        assert!(file.ends_with("config.json"));
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    mod xdg {
        use super::super::*;
        use serial_test::serial;
        use std::io::Write;

        /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
        fn with_xdg_config<F: FnOnce()>(value: Option<&str>, f: F) {
            let original = std::env::var("XDG_CONFIG_HOME").ok();
            match value {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
            f();
            match original {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        #[test]
        #[serial]
        fn test_config_dir_honors_xdg() {
            with_xdg_config(Some("/custom/config"), || {
                assert_eq!(config_dir(), PathBuf::from("/custom/config/keybase"));
            });
        }

        #[test]
        #[serial]
        fn test_config_dir_defaults_to_dot_config() {
            with_xdg_config(None, || {
                let home = dirs::home_dir().expect("home dir");
                assert_eq!(config_dir(), home.join(".config/keybase"));
            });
        }

        #[test]
        #[serial]
        fn test_read_config_parses_file() {
            let tmp = tempfile::tempdir().expect("create temp dir");
            let dir = tmp.path().join("keybase");
            std::fs::create_dir_all(&dir).expect("create keybase dir");
            let mut file = std::fs::File::create(dir.join("config.json")).expect("create file");
            writeln!(file, r#"{{"current_user": "alice"}}"#).expect("write config");

            with_xdg_config(tmp.path().to_str(), || {
                let config = read_config().expect("should read config");
                assert_eq!(config["current_user"], "alice");
            });
        }

        #[test]
        #[serial]
        fn test_read_config_missing_file() {
            let tmp = tempfile::tempdir().expect("create temp dir");
            with_xdg_config(tmp.path().to_str(), || {
                assert!(matches!(read_config(), Err(Error::Io { .. })));
            });
        }
    }
}
