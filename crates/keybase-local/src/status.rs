//! Daemon status as reported by `keybase status -j` and `keybase --version`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::runner::Runner;

/// Arguments for the JSON status report.
pub const STATUS_ARGS: [&str; 2] = ["status", "-j"];

/// Arguments for the version line.
pub const VERSION_ARGS: [&str; 1] = ["--version"];

/// The parts of `keybase status -j` this crate interprets.
///
/// All other fields are kept verbatim in [`DaemonStatus::extra`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DaemonStatus {
    /// Logged-in username (empty or absent when logged out).
    #[serde(rename = "Username", default)]
    pub username: Option<String>,
    /// Whether a user is logged in.
    #[serde(rename = "LoggedIn", default)]
    pub logged_in: bool,
    /// Remaining status fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DaemonStatus {
    /// Parse the output of `keybase status -j`.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }
}

/// Run `keybase status -j` and parse the report.
pub fn fetch_status<R: Runner>(runner: &R) -> Result<DaemonStatus> {
    let output = runner
        .run(&STATUS_ARGS, None)?
        .check(runner.describe(&STATUS_ARGS))?;
    DaemonStatus::parse(&output.stdout)
}

/// Extract the version from a line like `keybase version 5.9.3-20220218150040+3bd2d7d8d9`.
pub fn parse_version(line: &str) -> Option<&str> {
    line.split_whitespace().nth(2)
}

/// Run `keybase --version` and return the version token.
pub fn fetch_version<R: Runner>(runner: &R) -> Result<String> {
    let command = runner.describe(&VERSION_ARGS);
    let output = runner.run(&VERSION_ARGS, None)?.check(command.clone())?;
    parse_version(&output.stdout)
        .map(String::from)
        .ok_or(Error::UnexpectedOutput {
            command,
            output: output.stdout.trim().to_string(),
        })
}
