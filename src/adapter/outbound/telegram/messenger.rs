//! Telegram implementation of the [`Messenger`] port.

use async_trait::async_trait;
use teloxide::prelude::{Bot, Requester};
use teloxide::types::{ChatId as TelegramChatId, Recipient};
use teloxide::RequestError;

use crate::domain::{ChannelTarget, Destination};
use crate::error::SendError;
use crate::port::Messenger;

/// Sends plain-text messages through the Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, destination: &Destination, text: &str) -> Result<(), SendError> {
        self.bot
            .send_message(recipient(destination), text)
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

pub(super) fn recipient(destination: &Destination) -> Recipient {
    match destination {
        Destination::Chat(chat) => Recipient::Id(TelegramChatId(chat.0)),
        Destination::Channel(ChannelTarget::Username(name)) => {
            Recipient::ChannelUsername(name.clone())
        }
        Destination::Channel(ChannelTarget::Id(id)) => Recipient::Id(TelegramChatId(id.0)),
    }
}

/// Rejections by the API (bad token, unknown chat, bot not admin) are
/// distinguished from transport failures.
pub(super) fn classify(err: RequestError) -> SendError {
    match err {
        RequestError::Api(api) => SendError::Rejected(api.to_string()),
        RequestError::Network(e) => SendError::Network(e.to_string()),
        other => SendError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatId;

    #[test]
    fn chat_destination_maps_to_numeric_recipient() {
        assert_eq!(
            recipient(&Destination::Chat(ChatId(-100_123))),
            Recipient::Id(TelegramChatId(-100_123))
        );
    }

    #[test]
    fn channel_destination_maps_to_username_recipient() {
        assert_eq!(
            recipient(&Destination::channel("@prices")),
            Recipient::ChannelUsername("@prices".into())
        );
    }

    #[test]
    fn numeric_channel_maps_to_numeric_recipient() {
        assert_eq!(
            recipient(&Destination::Channel(ChannelTarget::Id(ChatId(-1_001_234)))),
            Recipient::Id(TelegramChatId(-1_001_234))
        );
    }
}
