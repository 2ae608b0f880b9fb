//! `kbl` support library.
//!
//! Configuration and logging for the `kbl` command-line front end to
//! [`keybase_local`]. The binary in `main.rs` owns argument parsing and
//! output; everything it needs from disk lives here.

pub mod config;
pub mod logging;

use std::path::Path;

use config::{error::ConfigError, loader::ConfigLoader, schema::Config};
use keybase_local::Client;

/// Loads the configuration and applies a `--keybase` override, if any.
pub fn load_config(path: Option<&Path>, keybase: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = ConfigLoader::load(path)?;
    if let Some(binary) = keybase {
        config.keybase.binary = binary.to_path_buf();
    }
    Ok(config)
}

/// Builds a client from the loaded configuration.
pub fn client(config: &Config) -> Client {
    Client::with_settings(config.keybase.clone())
}
