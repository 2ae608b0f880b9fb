//! Presence probes for the daemon and its KBFS companion.

use sysinfo::{ProcessesToUpdate, System};

/// A source of running process names.
///
/// Implemented by [`SystemProcesses`] for the real process list; tests supply
/// their own table.
pub trait ProcessTable {
    /// Names of all currently running processes.
    fn process_names(&self) -> Vec<String>;
}

/// The operating system's process list, queried through `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcesses;

impl ProcessTable for SystemProcesses {
    fn process_names(&self) -> Vec<String> {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);
        sys.processes()
            .values()
            .map(|process| process.name().to_string_lossy().into_owned())
            .collect()
    }
}

impl<T: ProcessTable + ?Sized> ProcessTable for &T {
    fn process_names(&self) -> Vec<String> {
        (**self).process_names()
    }
}

/// Returns `true` if a process called `name` appears in `table`.
///
/// Comparison ignores ASCII case and a trailing `.exe`.
pub fn is_process_running<T: ProcessTable + ?Sized>(table: &T, name: &str) -> bool {
    let found = table
        .process_names()
        .iter()
        .any(|candidate| matches_process(candidate, name));
    tracing::trace!(process = name, found, "Checked process table");
    found
}

fn matches_process(candidate: &str, name: &str) -> bool {
    let stem = match candidate.len().checked_sub(4) {
        Some(split)
            if candidate.is_char_boundary(split)
                && candidate[split..].eq_ignore_ascii_case(".exe") =>
        {
            &candidate[..split]
        }
        _ => candidate,
    };
    stem.eq_ignore_ascii_case(name)
}
