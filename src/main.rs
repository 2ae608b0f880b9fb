//! `kbl` - command-line front end for a local Keybase client.
//!
//! Results are printed to stdout (JSON where the client returns JSON);
//! errors and logs go to stderr.

use clap::{Parser, Subcommand};
use keybase_local::Role;
use keybase_local_cli::config::schema::LogLevel;
use keybase_local_cli::{client, load_config, logging};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[cfg(test)]
mod cli_tests;

/// Command-line front end for a local Keybase client
#[derive(Parser)]
#[command(name = "kbl")]
#[command(version, about = "Talk to the Keybase client running on this machine")]
pub(crate) struct Cli {
    /// Configuration file (default: $XDG_CONFIG_HOME/keybase-local/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keybase CLI to run instead of the configured one
    #[arg(long, global = true)]
    keybase: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kbl CLI
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show whether Keybase and KBFS are running and who is logged in
    Status {
        /// Print the full `keybase status -j` report
        #[arg(long)]
        json: bool,
    },

    /// Show client config and KBFS locations
    Paths,

    /// Keybase chat
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },

    /// Team administration
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// The KBFS mount
    Kbfs {
        #[command(subcommand)]
        action: KbfsAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `chat` subcommand.
///
/// `USERS` is a comma-separated list, e.g. `alice,bob`.
#[derive(Subcommand)]
pub(crate) enum ChatAction {
    /// List the inbox
    List {
        /// Only conversations of this topic type (e.g. "chat", "dev")
        #[arg(long)]
        topic_type: Option<String>,
    },
    /// Read a conversation
    Read {
        users: String,
        /// Do not mark the conversation read
        #[arg(long)]
        peek: bool,
        /// Only unread messages
        #[arg(long)]
        unread_only: bool,
    },
    /// Send a message
    Send {
        users: String,
        message: String,
        /// Post in the public conversation
        #[arg(long)]
        public: bool,
        /// Self-destruct after this long (e.g. "30s", "1h")
        #[arg(long)]
        exploding: Option<String>,
    },
    /// Send a message to a team channel
    SendTeam {
        team: String,
        topic: String,
        message: String,
        /// Self-destruct after this long (e.g. "30s", "1h")
        #[arg(long)]
        exploding: Option<String>,
    },
    /// Delete a message
    Delete { users: String, id: u64 },
    /// Replace the text of a message
    Edit {
        users: String,
        id: u64,
        message: String,
    },
    /// Upload a file
    Upload {
        users: String,
        path: PathBuf,
        title: String,
    },
    /// Download an attachment
    Download {
        users: String,
        id: u64,
        path: PathBuf,
    },
    /// Mark a conversation read up to a message
    Mark { users: String, id: u64 },
    /// Mute a conversation
    Mute { users: String },
}

/// Actions for the `team` subcommand.
#[derive(Subcommand)]
pub(crate) enum TeamAction {
    /// Teams the current user belongs to
    ListMemberships {
        /// Bypass the client's cache
        #[arg(long)]
        force_poll: bool,
    },
    /// Members of a team
    ListMembers {
        team: String,
        /// Bypass the client's cache
        #[arg(long)]
        force_poll: bool,
    },
    /// Create a team
    Create { team: String },
    /// Add a member (or invite by email)
    AddMember {
        team: String,
        user: String,
        #[arg(long, default_value_t = Role::Reader)]
        role: Role,
        /// USER is an email address
        #[arg(long)]
        email: bool,
    },
    /// Remove a member
    RemoveMember { team: String, user: String },
    /// Change a member's role
    EditMember {
        team: String,
        user: String,
        #[arg(long)]
        role: Role,
    },
    /// Rename a subteam
    Rename { team: String, new_name: String },
    /// Ask to join a team
    RequestAccess { team: String },
    /// Pending access requests for teams you administer
    ListRequests,
    /// Decline an access request
    IgnoreRequest { team: String, user: String },
    /// Accept an invitation token
    AcceptInvite { token: String },
    /// Leave a team
    Leave {
        team: String,
        /// Never be re-added
        #[arg(long)]
        permanent: bool,
    },
    /// Delete a team
    Delete { team: String },
}

/// Actions for the `kbfs` subcommand.
#[derive(Subcommand)]
pub(crate) enum KbfsAction {
    /// Print the KBFS status file
    Status,
    /// Exit successfully if KBFS is mounted
    Mounted,
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Config { action } = &cli.command {
        logging::init(LogLevel::default());
        return commands::run_config_command(action, cli.config.as_deref());
    }

    let config = match load_config(cli.config.as_deref(), cli.keybase.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log.level);
    let client = client(&config);

    match cli.command {
        Commands::Status { json } => commands::run_status_command(&client, json),
        Commands::Paths => commands::run_paths_command(&client),
        Commands::Chat { action } => commands::run_chat_command(&client, action),
        Commands::Team { action } => commands::run_team_command(&client, action),
        Commands::Kbfs { action } => commands::run_kbfs_command(&client, action),
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}
