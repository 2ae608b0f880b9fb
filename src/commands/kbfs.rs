//! `kbl kbfs` - KBFS mount queries.

use std::process::ExitCode;

use keybase_local::Client;

use super::finish;
use crate::KbfsAction;

/// Runs one KBFS action.
pub(crate) fn run_kbfs_command(client: &Client, action: KbfsAction) -> ExitCode {
    let kbfs = client.kbfs();
    match action {
        KbfsAction::Status => finish(kbfs.status()),
        KbfsAction::Mounted => {
            if kbfs.is_mounted() {
                println!("KBFS is mounted at {}", kbfs.mount_point().display());
                ExitCode::SUCCESS
            } else {
                println!("KBFS is not mounted at {}", kbfs.mount_point().display());
                ExitCode::FAILURE
            }
        }
    }
}
