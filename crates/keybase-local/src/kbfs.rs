//! KBFS, the Keybase filesystem mount.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::team::validate;

/// Hidden file KBFS exposes at the root of its mount.
///
/// Its presence tells a live KBFS mount apart from a plain directory that
/// happens to sit at the mount point.
pub const KBFS_STATUS_FILE: &str = ".kbfs_status";

/// A KBFS mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kbfs {
    mount: PathBuf,
}

impl Kbfs {
    /// Refer to KBFS mounted at `mount`.
    pub fn new(mount: impl AsRef<Path>) -> Self {
        Self {
            mount: mount.as_ref().to_path_buf(),
        }
    }

    /// The mount point with symlinks resolved, or as configured if it does not exist.
    pub fn mount_point(&self) -> PathBuf {
        fs::canonicalize(&self.mount).unwrap_or_else(|_| self.mount.clone())
    }

    /// Path of the status file.
    pub fn status_file(&self) -> PathBuf {
        self.mount_point().join(KBFS_STATUS_FILE)
    }

    /// Whether KBFS is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.status_file().exists()
    }

    /// Contents of the status file.
    ///
    /// # Errors
    ///
    /// [`Error::KbfsNotRunning`] if KBFS is not mounted.
    pub fn status(&self) -> Result<Value> {
        if !self.is_mounted() {
            return Err(Error::KbfsNotRunning);
        }
        let path = self.status_file();
        let content = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `<mount>/private/<user>`.
    pub fn private_dir(&self, user: &str) -> PathBuf {
        self.mount_point().join("private").join(user)
    }

    /// `<mount>/public/<user>`.
    pub fn public_dir(&self, user: &str) -> PathBuf {
        self.mount_point().join("public").join(user)
    }

    /// `<mount>/team/<team>`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTeamName`] unless `team` is a valid team name, so the
    /// result never points outside the mount.
    pub fn team_dir(&self, team: &str) -> Result<PathBuf> {
        validate(team)?;
        Ok(self.mount_point().join("team").join(team))
    }
}
