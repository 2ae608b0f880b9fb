//! CLI argument parsing tests.

use crate::{ChatAction, Cli, Commands, ConfigAction, KbfsAction, TeamAction};
use clap::{CommandFactory, Parser};
use keybase_local::Role;
use std::path::PathBuf;

#[test]
fn verify_cli() {
    // Verify the CLI configuration is valid
    Cli::command().debug_assert();
}

#[test]
fn test_chat_without_action_fails() {
    let result = Cli::try_parse_from(["kbl", "chat"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "kbl",
        "status",
        "--keybase",
        "/opt/keybase",
        "--config",
        "/tmp/kbl.toml",
    ])
    .unwrap();
    assert_eq!(cli.keybase, Some(PathBuf::from("/opt/keybase")));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/kbl.toml")));
    assert!(matches!(cli.command, Commands::Status { json: false }));
}

#[test]
fn test_status_json_flag() {
    let cli = Cli::try_parse_from(["kbl", "status", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Status { json: true }));
}

#[test]
fn test_chat_send_arguments() {
    let cli = Cli::try_parse_from([
        "kbl",
        "chat",
        "send",
        "alice,bob",
        "hello there",
        "--exploding",
        "1h",
    ])
    .unwrap();
    match cli.command {
        Commands::Chat {
            action:
                ChatAction::Send {
                    users,
                    message,
                    public,
                    exploding,
                },
        } => {
            assert_eq!(users, "alice,bob");
            assert_eq!(message, "hello there");
            assert!(!public);
            assert_eq!(exploding.as_deref(), Some("1h"));
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_chat_message_id_must_be_numeric() {
    let result = Cli::try_parse_from(["kbl", "chat", "delete", "alice", "latest"]);
    assert!(result.is_err());
}

#[test]
fn test_chat_read_flags() {
    let cli = Cli::try_parse_from(["kbl", "chat", "read", "alice", "--peek"]).unwrap();
    match cli.command {
        Commands::Chat {
            action:
                ChatAction::Read {
                    peek, unread_only, ..
                },
        } => {
            assert!(peek);
            assert!(!unread_only);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_add_member_role_defaults_to_reader() {
    let cli = Cli::try_parse_from(["kbl", "team", "add-member", "acme", "alice"]).unwrap();
    match cli.command {
        Commands::Team {
            action: TeamAction::AddMember { role, email, .. },
        } => {
            assert_eq!(role, Role::Reader);
            assert!(!email);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_add_member_parses_role() {
    let cli = Cli::try_parse_from([
        "kbl",
        "team",
        "add-member",
        "acme",
        "alice",
        "--role",
        "admin",
    ])
    .unwrap();
    match cli.command {
        Commands::Team {
            action: TeamAction::AddMember { role, .. },
        } => assert_eq!(role, Role::Admin),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_unknown_role_is_rejected() {
    let result = Cli::try_parse_from([
        "kbl",
        "team",
        "edit-member",
        "acme",
        "alice",
        "--role",
        "janitor",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_edit_member_requires_role() {
    let result = Cli::try_parse_from(["kbl", "team", "edit-member", "acme", "alice"]);
    assert!(result.is_err());
}

#[test]
fn test_team_leave_permanent() {
    let cli = Cli::try_parse_from(["kbl", "team", "leave", "acme", "--permanent"]).unwrap();
    match cli.command {
        Commands::Team {
            action: TeamAction::Leave { team, permanent },
        } => {
            assert_eq!(team, "acme");
            assert!(permanent);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_kbfs_mounted() {
    let cli = Cli::try_parse_from(["kbl", "kbfs", "mounted"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Kbfs {
            action: KbfsAction::Mounted
        }
    ));
}

#[test]
fn test_config_init_force() {
    let cli = Cli::try_parse_from(["kbl", "config", "init", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Init { force: true }
        }
    ));
}
