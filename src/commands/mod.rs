//! Command implementations for the kbl CLI.
//!
//! This module contains all command handler functions, organized by domain:
//! - `status` - Daemon status and client paths
//! - `chat` - Chat API calls
//! - `team` - Team administration
//! - `kbfs` - KBFS mount queries
//! - `config` - Config file management

pub(crate) mod chat;
pub(crate) mod config;
pub(crate) mod kbfs;
pub(crate) mod status;
pub(crate) mod team;

pub(crate) use chat::*;
pub(crate) use config::*;
pub(crate) use kbfs::*;
pub(crate) use status::*;
pub(crate) use team::*;

use std::process::ExitCode;

use serde::Serialize;

/// Prints `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to format output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints a client result, or the error on stderr.
pub(crate) fn finish<T: Serialize>(result: keybase_local::Result<T>) -> ExitCode {
    match result {
        Ok(value) => print_json(&value),
        Err(e) => fail(&e),
    }
}

/// Reports `error` on stderr.
pub(crate) fn fail(error: &keybase_local::Error) -> ExitCode {
    tracing::debug!(?error, "command failed");
    eprintln!("Error: {error}");
    ExitCode::FAILURE
}

/// Splits a comma-separated `alice,bob` argument into usernames.
pub(crate) fn split_users(users: &str) -> Vec<&str> {
    users
        .split(',')
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .collect()
}
