//! `kbl status` and `kbl paths`.

use std::process::ExitCode;

use keybase_local::{paths, Client, Error};

use super::{fail, print_json};

/// Prints whether the daemon and KBFS are up, and who is logged in.
///
/// Returns `ExitCode::FAILURE` when the daemon is not running.
pub(crate) fn run_status_command(client: &Client, json: bool) -> ExitCode {
    if !client.is_running() {
        if json {
            return fail(&Error::NotRunning);
        }
        println!("Keybase");
        println!("  Status:      not running");
        return ExitCode::FAILURE;
    }

    let status = match client.status() {
        Ok(status) => status,
        Err(e) => return fail(&e),
    };
    if json {
        return print_json(&status);
    }

    let version = client
        .running_version()
        .unwrap_or_else(|_| "unknown".to_string());
    let user = match (status.logged_in, status.current_user()) {
        (true, Some(user)) => user.to_string(),
        _ => "not logged in".to_string(),
    };
    let kbfs = if client.is_kbfs_running() {
        "running"
    } else {
        "not running"
    };

    println!("Keybase");
    println!("  Status:      running");
    println!("  Version:     {version}");
    println!("  User:        {user}");
    println!("  KBFS:        {kbfs}");
    ExitCode::SUCCESS
}

/// Prints the client config location and the KBFS directories.
pub(crate) fn run_paths_command(client: &Client) -> ExitCode {
    let kbfs = client.kbfs();
    println!("Config dir:  {}", paths::config_dir().display());
    println!("Config file: {}", paths::config_file().display());
    println!("KBFS mount:  {}", kbfs.mount_point().display());

    if client.is_running() {
        match client.current_user() {
            Ok(user) => {
                println!("Private:     {}", kbfs.private_dir(&user).display());
                println!("Public:      {}", kbfs.public_dir(&user).display());
            }
            Err(Error::NotLoggedIn) => {}
            Err(e) => return fail(&e),
        }
    }
    ExitCode::SUCCESS
}
