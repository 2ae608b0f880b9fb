//! `kbl chat` - one chat API request per invocation.

use std::process::ExitCode;

use keybase_local::Client;

use super::{fail, finish, split_users};
use crate::ChatAction;

/// Runs one chat action and prints the API result.
pub(crate) fn run_chat_command(client: &Client, action: ChatAction) -> ExitCode {
    let chat = match client.chat() {
        Ok(chat) => chat,
        Err(e) => return fail(&e),
    };

    let result = match action {
        ChatAction::List { topic_type } => chat.list_inbox(topic_type.as_deref()),
        ChatAction::Read {
            users,
            peek,
            unread_only,
        } => chat.conversation(&split_users(&users), peek, unread_only),
        ChatAction::Send {
            users,
            message,
            public,
            exploding,
        } => chat.send_message(&split_users(&users), &message, public, exploding.as_deref()),
        ChatAction::SendTeam {
            team,
            topic,
            message,
            exploding,
        } => chat.send_team_message(&team, &topic, &message, exploding.as_deref()),
        ChatAction::Delete { users, id } => chat.delete_message(&split_users(&users), id),
        ChatAction::Edit { users, id, message } => {
            chat.edit_message(&split_users(&users), id, &message)
        }
        ChatAction::Upload { users, path, title } => {
            chat.upload_attachment(&split_users(&users), &path, &title)
        }
        ChatAction::Download { users, id, path } => {
            chat.download_attachment(&split_users(&users), id, &path)
        }
        ChatAction::Mark { users, id } => chat.mark_conversation(&split_users(&users), id),
        ChatAction::Mute { users } => chat.mute_conversation(&split_users(&users)),
    };
    finish(result)
}
