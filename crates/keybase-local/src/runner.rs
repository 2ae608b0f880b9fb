//! One-shot invocation of the Keybase CLI.
//!
//! Every API call spawns a fresh process, optionally feeds it a request on
//! stdin, and collects whatever it prints. There is no connection reuse.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited successfully.
    pub success: bool,
    /// Exit code (None if terminated by signal).
    pub code: Option<i32>,
    /// Everything written to stdout.
    pub stdout: String,
    /// Everything written to stderr.
    pub stderr: String,
}

impl CommandOutput {
    /// Convert a failed run into [`Error::CommandFailed`], passing successes through.
    pub fn check(self, command: impl Into<String>) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::CommandFailed {
                command: command.into(),
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Runs the Keybase CLI with a list of arguments.
pub trait Runner {
    /// Execute the CLI with `args`, writing `input` to its stdin if given.
    fn run(&self, args: &[&str], input: Option<&str>) -> Result<CommandOutput>;

    /// Human-readable command line for `args`, used in errors and logs.
    fn describe(&self, args: &[&str]) -> String;
}

impl<T: Runner + ?Sized> Runner for &T {
    fn run(&self, args: &[&str], input: Option<&str>) -> Result<CommandOutput> {
        (**self).run(args, input)
    }

    fn describe(&self, args: &[&str]) -> String {
        (**self).describe(args)
    }
}

/// Spawns the real Keybase binary.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    /// Create a runner for `program` (a path, or a bare name looked up on `PATH`).
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    /// The program this runner executes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotInstalled {
                program: self.program.clone(),
            }
        } else {
            Error::Spawn {
                program: self.program.clone(),
                source,
            }
        }
    }
}

impl Runner for ProcessRunner {
    fn run(&self, args: &[&str], input: Option<&str>) -> Result<CommandOutput> {
        tracing::debug!(command = %self.describe(args), stdin = input.is_some(), "Spawning keybase");

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(payload) = input {
            // Dropping stdin after the write closes the pipe so keybase sees EOF.
            if let Some(mut stdin) = child.stdin.take() {
                match stdin.write_all(payload.as_bytes()) {
                    Ok(()) => {}
                    // Exited without reading its request; the exit status and
                    // stderr below say why.
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                        tracing::debug!(command = %self.describe(args), "keybase closed stdin early");
                    }
                    Err(e) => {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(self.spawn_error(e));
                    }
                }
            }
        }

        let output = child.wait_with_output().map_err(|e| self.spawn_error(e))?;
        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success {
            tracing::debug!(
                command = %self.describe(args),
                code = ?result.code,
                "keybase exited unsuccessfully"
            );
        }
        Ok(result)
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut line = self.program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
