//! Reads `config.toml`, reporting TOML errors as `path:line:column`.
//!
//! An explicit `--config` path must exist. The default XDG location may be
//! absent, in which case the built-in defaults apply.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Stateless configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from `path` if given, otherwise from the default location.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    /// Load a specific file. A missing file is [`ConfigError::Missing`].
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::Missing {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        tracing::debug!(path = %path.display(), "Read kbl config");
        Self::parse_toml(&text, path)
    }

    /// Load the XDG config file, or defaults when there is none.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No kbl config, using defaults");
            return Ok(Config::default());
        }
        Self::load_from_path(&path)
    }

    /// Parse `text` and expand `~` in the binary and mount paths.
    fn parse_toml(text: &str, path: &Path) -> Result<Config, ConfigError> {
        match toml::from_str::<Config>(text) {
            Ok(mut config) => {
                let keybase = &mut config.keybase;
                keybase.binary = xdg::expand_tilde(&keybase.binary);
                keybase.kbfs_mount = xdg::expand_tilde(&keybase.kbfs_mount);
                Ok(config)
            }
            Err(e) => {
                let (line, column) = e
                    .span()
                    .map_or((0, 0), |span| line_column(text, span.start));
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    line,
                    column,
                    message: e.message().to_string(),
                })
            }
        }
    }
}

/// One-based line and column of byte `offset` in `text`.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
    (line, offset - line_start + 1)
}
