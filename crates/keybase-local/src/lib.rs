//! # keybase-local
//!
//! Bindings for a Keybase client running on the local machine.
//!
//! The crate drives the `keybase` command-line interface: it detects whether
//! the daemon and KBFS are running, locates the client's configuration, and
//! wraps the chat API, team administration and the KBFS status file.
//!
//! ## Model
//!
//! - One request per spawned process. No pooling, batching or retries.
//! - Chat calls write a JSON envelope (`{method, params: {options}}`) to
//!   `keybase chat api` and return the response's `result`, or
//!   [`Error::Chat`] with the daemon's message.
//! - Team calls run `keybase team ...` and parse JSON output where there is any.
//!
//! ## Example
//!
//! ```rust,no_run
//! use keybase_local::Client;
//!
//! let client = Client::new();
//! if client.is_running() {
//!     let chat = client.chat()?;
//!     chat.send_message(&["alice", "bob"], "hello!", false, None)?;
//! }
//! # Ok::<(), keybase_local::Error>(())
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod envelope;
mod client;
mod error;
pub mod kbfs;
pub mod paths;
pub mod process;
pub mod runner;
mod settings;
pub mod status;
pub mod team;

#[cfg(test)]
mod testing;

pub use chat::{conversation_name, Chat, ChatMethod, ChatOptions};
pub use client::Client;
pub use envelope::{ApiResponse, Envelope};
pub use error::{Error, Result};
pub use kbfs::Kbfs;
pub use process::{is_process_running, ProcessTable, SystemProcesses};
pub use runner::{CommandOutput, ProcessRunner, Runner};
pub use settings::{
    Settings, DEFAULT_BINARY, DEFAULT_DAEMON_PROCESS, DEFAULT_KBFS_MOUNT, DEFAULT_KBFS_PROCESS,
};
pub use status::DaemonStatus;
pub use team::{is_valid_team_name, Role, Team};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
