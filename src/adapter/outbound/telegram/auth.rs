//! Authorization for Telegram command handling.

use tracing::{debug, warn};

use super::command::{
    command_help, mentioned_bot, parse_command, CommandParseError, RelayCommand,
};
use crate::domain::ChatId;

/// What to do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Run a parsed command.
    Execute(RelayCommand),
    /// Reply with fixed text (invalid command).
    Reply(String),
}

/// Decide how to handle a message from `incoming_chat`.
///
/// Returns `None` for:
/// - Messages from chats outside a non-empty allow-list
/// - Messages that are not commands (don't start with `/`)
/// - Commands addressed to another bot (`/stop@OtherBot`) when our own
///   username is known
///
/// Returns `Some` for:
/// - Valid commands from an authorized chat
/// - Invalid commands (with error message and help)
pub fn dispatch_for_message(
    text: &str,
    incoming_chat: ChatId,
    allowed_chats: &[ChatId],
    bot_username: Option<&str>,
) -> Option<Dispatch> {
    if !is_authorized_chat(incoming_chat, allowed_chats) {
        return None;
    }

    if let (Some(mention), Some(own)) = (mentioned_bot(text), bot_username) {
        if !mention.eq_ignore_ascii_case(own) {
            debug!(chat_id = incoming_chat.0, bot = mention, "Ignoring command for another bot");
            return None;
        }
    }

    match parse_command(text) {
        Ok(command) => Some(Dispatch::Execute(command)),
        Err(CommandParseError::NotACommand) => None,
        Err(err) => Some(Dispatch::Reply(format!(
            "Invalid command: {err}\n\n{}",
            command_help()
        ))),
    }
}

/// An empty allow-list admits every chat.
fn is_authorized_chat(incoming_chat: ChatId, allowed_chats: &[ChatId]) -> bool {
    if allowed_chats.is_empty() || allowed_chats.contains(&incoming_chat) {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Ignoring Telegram message from unauthorized chat"
    );
    false
}
