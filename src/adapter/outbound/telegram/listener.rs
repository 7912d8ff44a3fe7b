//! Inbound Telegram update loop.

use std::sync::Arc;

use teloxide::prelude::{Bot, Message, Requester};
use teloxide::respond;
use teloxide::types::{BotCommand, User};
use tracing::{error, info, warn};

use super::auth::{dispatch_for_message, Dispatch};
use super::command::bot_commands;
use super::control::TelegramControl;
use super::messenger::classify;
use crate::domain::ChatId;
use crate::error::SendError;

/// Name used when a message has no sender (channel posts).
const DEFAULT_USER_NAME: &str = "User";

/// Run the command listener until the process receives Ctrl-C.
///
/// With `bot_username` known, commands addressed to other bots are ignored.
pub async fn run_listener(
    bot: Bot,
    control: TelegramControl,
    allowed_chats: Vec<ChatId>,
    bot_username: Option<String>,
) {
    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        allowed_chats = allowed_chats.len(),
        bot = bot_username.as_deref().unwrap_or("unknown"),
        "Telegram command listener started"
    );

    let allowed_chats = Arc::new(allowed_chats);
    let bot_username = Arc::new(bot_username);

    teloxide::repl(bot, move |msg: Message| {
        let control = control.clone();
        let allowed_chats = Arc::clone(&allowed_chats);
        let bot_username = Arc::clone(&bot_username);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };
            let chat = ChatId(msg.chat.id.0);

            match dispatch_for_message(text, chat, &allowed_chats, bot_username.as_deref()) {
                Some(Dispatch::Execute(command)) => {
                    control
                        .execute(command, chat, sender_name(msg.from.as_ref()))
                        .await;
                }
                Some(Dispatch::Reply(response)) => {
                    if let Err(e) = control.reply(chat, &response).await {
                        error!(error = %e, "Failed to send Telegram command response");
                    }
                }
                None => {}
            }

            respond(())
        }
    })
    .await;

    info!("Telegram command listener stopped");
}

/// First name of the user who sent a message.
///
/// The sender, not the chat: in groups the chat has no first name.
fn sender_name(sender: Option<&User>) -> &str {
    sender
        .map(|user| user.first_name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_USER_NAME)
}

/// Register bot commands with Telegram for the "/" menu.
pub async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

/// Check the bot token with `getMe` and return the bot's username.
///
/// # Errors
///
/// [`SendError::Rejected`] when Telegram refuses the token,
/// [`SendError::Network`] when Telegram could not be reached.
pub async fn verify_token(bot: &Bot) -> Result<String, SendError> {
    let me = bot.get_me().await.map_err(classify)?;
    let username = me.user.username.clone().unwrap_or_default();
    info!(bot = %username, "Telegram token verified");
    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(json: &str) -> User {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn sender_name_uses_sender_first_name() {
        let sender = user(r#"{"id": 7, "is_bot": false, "first_name": "Ada", "last_name": "L"}"#);
        assert_eq!(sender_name(Some(&sender)), "Ada");
    }

    #[test]
    fn sender_name_falls_back_without_sender() {
        assert_eq!(sender_name(None), DEFAULT_USER_NAME);
    }

    #[test]
    fn sender_name_falls_back_on_blank_name() {
        let sender = user(r#"{"id": 7, "is_bot": false, "first_name": "  "}"#);
        assert_eq!(sender_name(Some(&sender)), DEFAULT_USER_NAME);
    }
}
