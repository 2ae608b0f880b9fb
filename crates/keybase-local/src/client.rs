//! Entry point tying the probes, status and API handles together.

use std::path::PathBuf;

use crate::chat::Chat;
use crate::error::{Error, Result};
use crate::kbfs::Kbfs;
use crate::process::{is_process_running, ProcessTable, SystemProcesses};
use crate::runner::{ProcessRunner, Runner};
use crate::settings::Settings;
use crate::status::{fetch_status, fetch_version, DaemonStatus};
use crate::team::Team;

/// A connection-free handle on the local Keybase installation.
///
/// Nothing is cached: each query spawns the CLI or reads the process table
/// again, so results always reflect the current state of the daemon.
#[derive(Debug, Clone)]
pub struct Client<R = ProcessRunner, P = SystemProcesses> {
    runner: R,
    processes: P,
    settings: Settings,
}

impl Client {
    /// Client with default [`Settings`].
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Client using the real binary and process table described by `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            runner: ProcessRunner::new(&settings.binary),
            processes: SystemProcesses,
            settings,
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runner, P: ProcessTable> Client<R, P> {
    /// Client built from explicit parts.
    pub fn from_parts(runner: R, processes: P, settings: Settings) -> Self {
        Self {
            runner,
            processes,
            settings,
        }
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the Keybase daemon is running.
    pub fn is_running(&self) -> bool {
        is_process_running(&self.processes, &self.settings.daemon_process)
    }

    /// Whether the KBFS companion process is running.
    pub fn is_kbfs_running(&self) -> bool {
        is_process_running(&self.processes, &self.settings.kbfs_process)
    }

    /// The daemon's current status report.
    pub fn status(&self) -> Result<DaemonStatus> {
        fetch_status(&self.runner)
    }

    /// Whether a user is logged in.
    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.status()?.logged_in)
    }

    /// Username of the logged-in user.
    pub fn current_user(&self) -> Result<String> {
        let status = self.status()?;
        match status.current_user() {
            Some(user) if status.logged_in => Ok(user.to_string()),
            _ => Err(Error::NotLoggedIn),
        }
    }

    /// Version string of the running daemon.
    pub fn running_version(&self) -> Result<String> {
        if !self.is_running() {
            return Err(Error::NotRunning);
        }
        fetch_version(&self.runner)
    }

    /// Fails unless the daemon is running and someone is logged in.
    pub fn ensure_ready(&self) -> Result<()> {
        if !self.is_running() {
            return Err(Error::NotRunning);
        }
        if !self.is_logged_in()? {
            return Err(Error::NotLoggedIn);
        }
        Ok(())
    }

    /// The configured KBFS mount.
    pub fn kbfs(&self) -> Kbfs {
        Kbfs::new(&self.settings.kbfs_mount)
    }

    /// The current user's private KBFS directory.
    pub fn private_dir(&self) -> Result<PathBuf> {
        Ok(self.kbfs().private_dir(&self.current_user()?))
    }

    /// The current user's public KBFS directory.
    pub fn public_dir(&self) -> Result<PathBuf> {
        Ok(self.kbfs().public_dir(&self.current_user()?))
    }

    /// The KBFS directory shared by `team`, after checking the team name.
    pub fn team_dir(&self, team: &str) -> Result<PathBuf> {
        self.kbfs().team_dir(team)
    }

    /// Chat API handle, after checking the daemon is ready.
    pub fn chat(&self) -> Result<Chat<&R>> {
        self.ensure_ready()?;
        Ok(Chat::new(&self.runner))
    }

    /// Team handle, after checking the daemon is ready.
    pub fn team(&self) -> Result<Team<&R>> {
        self.ensure_ready()?;
        Ok(Team::new(&self.runner))
    }
}
