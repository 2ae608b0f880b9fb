//! Keybase's JSON chat API (`keybase chat api`).

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::envelope::{ApiResponse, Envelope};
use crate::error::{Error, Result};
use crate::runner::Runner;

/// Arguments that select the chat API subcommand.
pub const CHAT_API_ARGS: [&str; 2] = ["chat", "api"];

/// Chat API methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMethod {
    /// List the inbox.
    List,
    /// Read a conversation.
    Read,
    /// Send a message.
    Send,
    /// Delete a message.
    Delete,
    /// Edit a message.
    Edit,
    /// Upload an attachment.
    Attach,
    /// Download an attachment.
    Download,
    /// Mark a conversation read.
    Mark,
    /// Change a conversation's status.
    SetStatus,
}

/// Conversation selector.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Channel {
    /// Comma-joined user list, or a team name.
    pub name: String,
    /// Whether the conversation is public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// `"team"` for team conversations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_type: Option<String>,
    /// Channel within a team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
}

impl Channel {
    /// Conversation between `users`.
    pub fn users<S: AsRef<str>>(users: &[S]) -> Self {
        Self {
            name: conversation_name(users),
            ..Self::default()
        }
    }

    /// Channel `topic` of `team`.
    pub fn team(team: &str, topic: &str) -> Self {
        Self {
            name: team.to_string(),
            members_type: Some("team".to_string()),
            topic_name: Some(topic.to_string()),
            ..Self::default()
        }
    }
}

/// Message payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageBody {
    /// Message text.
    pub body: String,
}

/// Options accepted by the chat API. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChatOptions {
    /// Conversation to act on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    /// Inbox filter for `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_type: Option<String>,
    /// Read without marking as read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peek: Option<bool>,
    /// Only return unread messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
    /// Lifetime after which the message explodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exploding_lifetime: Option<String>,
    /// Message to send or replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageBody>,
    /// Target message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<u64>,
    /// File to upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Attachment title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Download destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// New conversation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Joins a user list into a conversation name (`alice,bob`).
pub fn conversation_name<S: AsRef<str>>(users: &[S]) -> String {
    users
        .iter()
        .map(|u| u.as_ref().trim())
        .filter(|u| !u.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Checks an exploding-message lifetime such as `"30s"` or `"1h30m"`.
fn validate_lifetime(lifetime: Option<&str>) -> Result<Option<String>> {
    lifetime
        .map(|l| {
            humantime::parse_duration(l)
                .map(|_| l.to_string())
                .map_err(|source| Error::InvalidLifetime {
                    lifetime: l.to_string(),
                    source,
                })
        })
        .transpose()
}

/// Handle for chat operations.
///
/// Each method spawns `keybase chat api`, writes one envelope to it and
/// returns the `result` of the response.
#[derive(Debug, Clone)]
pub struct Chat<R> {
    runner: R,
}

impl<R: Runner> Chat<R> {
    /// Create a chat handle that executes through `runner`.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Send one chat API request and unwrap the response.
    pub fn call(&self, method: ChatMethod, options: ChatOptions) -> Result<Value> {
        let request = Envelope::new(method, options).to_json()?;
        tracing::debug!(?method, "Chat API call");

        let output = self.runner.run(&CHAT_API_ARGS, Some(&request))?;
        if output.stdout.trim().is_empty() {
            output.clone().check(self.runner.describe(&CHAT_API_ARGS))?;
            return Err(Error::UnexpectedOutput {
                command: self.runner.describe(&CHAT_API_ARGS),
                output: output.stdout,
            });
        }

        ApiResponse::parse(&output.stdout)?.unwrap_result()
    }

    /// List the current user's inbox, optionally filtered by topic type.
    pub fn list_inbox(&self, topic_type: Option<&str>) -> Result<Value> {
        self.call(
            ChatMethod::List,
            ChatOptions {
                topic_type: topic_type.map(String::from),
                ..ChatOptions::default()
            },
        )
    }

    /// Read a conversation.
    ///
    /// With `peek`, the conversation is not marked read.
    pub fn conversation<S: AsRef<str>>(
        &self,
        users: &[S],
        peek: bool,
        unread_only: bool,
    ) -> Result<Value> {
        self.call(
            ChatMethod::Read,
            ChatOptions {
                channel: Some(Channel::users(users)),
                peek: Some(peek),
                unread_only: Some(unread_only),
                ..ChatOptions::default()
            },
        )
    }

    /// Send a message to a conversation between users.
    ///
    /// For team channels see [`Chat::send_team_message`].
    pub fn send_message<S: AsRef<str>>(
        &self,
        users: &[S],
        message: &str,
        public: bool,
        exploding_lifetime: Option<&str>,
    ) -> Result<Value> {
        let exploding_lifetime = validate_lifetime(exploding_lifetime)?;
        self.call(
            ChatMethod::Send,
            ChatOptions {
                channel: Some(Channel {
                    public: Some(public),
                    ..Channel::users(users)
                }),
                exploding_lifetime,
                message: Some(MessageBody {
                    body: message.to_string(),
                }),
                ..ChatOptions::default()
            },
        )
    }

    /// Send a message to `topic` in `team`.
    pub fn send_team_message(
        &self,
        team: &str,
        topic: &str,
        message: &str,
        exploding_lifetime: Option<&str>,
    ) -> Result<Value> {
        let exploding_lifetime = validate_lifetime(exploding_lifetime)?;
        self.call(
            ChatMethod::Send,
            ChatOptions {
                channel: Some(Channel::team(team, topic)),
                exploding_lifetime,
                message: Some(MessageBody {
                    body: message.to_string(),
                }),
                ..ChatOptions::default()
            },
        )
    }

    /// Delete message `id`.
    pub fn delete_message<S: AsRef<str>>(&self, users: &[S], id: u64) -> Result<Value> {
        self.call(
            ChatMethod::Delete,
            ChatOptions {
                channel: Some(Channel::users(users)),
                message_id: Some(id),
                ..ChatOptions::default()
            },
        )
    }

    /// Replace the text of message `id`.
    pub fn edit_message<S: AsRef<str>>(&self, users: &[S], id: u64, message: &str) -> Result<Value> {
        self.call(
            ChatMethod::Edit,
            ChatOptions {
                channel: Some(Channel::users(users)),
                message_id: Some(id),
                message: Some(MessageBody {
                    body: message.to_string(),
                }),
                ..ChatOptions::default()
            },
        )
    }

    /// Upload the file at `path` with `title`.
    pub fn upload_attachment<S: AsRef<str>>(
        &self,
        users: &[S],
        path: &Path,
        title: &str,
    ) -> Result<Value> {
        self.call(
            ChatMethod::Attach,
            ChatOptions {
                channel: Some(Channel::users(users)),
                filename: Some(path.display().to_string()),
                title: Some(title.to_string()),
                ..ChatOptions::default()
            },
        )
    }

    /// Download the attachment of message `id` to `path`.
    pub fn download_attachment<S: AsRef<str>>(
        &self,
        users: &[S],
        id: u64,
        path: &Path,
    ) -> Result<Value> {
        self.call(
            ChatMethod::Download,
            ChatOptions {
                channel: Some(Channel::users(users)),
                message_id: Some(id),
                output: Some(path.display().to_string()),
                ..ChatOptions::default()
            },
        )
    }

    /// Mark the conversation read up to message `id`.
    pub fn mark_conversation<S: AsRef<str>>(&self, users: &[S], id: u64) -> Result<Value> {
        self.call(
            ChatMethod::Mark,
            ChatOptions {
                channel: Some(Channel::users(users)),
                message_id: Some(id),
                ..ChatOptions::default()
            },
        )
    }

    /// Mute a conversation.
    pub fn mute_conversation<S: AsRef<str>>(&self, users: &[S]) -> Result<Value> {
        self.call(
            ChatMethod::SetStatus,
            ChatOptions {
                channel: Some(Channel::users(users)),
                status: Some("muted".to_string()),
                ..ChatOptions::default()
            },
        )
    }
}
