//! Telegram command execution against the relay and job registry.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::{ChatJobRegistry, DeliveryOutcome, Relay};
use crate::domain::{ChatId, Destination, JobSchedule};
use crate::error::Result;

use super::command::{command_help, RelayCommand};

mod render;

/// Reply to `/stop` when a job was cancelled.
pub const STOPPED_MESSAGE: &str = "🛑 Updates stopped! Use /start to resume.";

/// Reply to `/stop` when the chat had no job.
pub const NOTHING_TO_STOP_MESSAGE: &str = "ℹ️ No active updates to stop.";

/// Interim reply to `/prices`.
pub const FETCHING_MESSAGE: &str = "🔄 Fetching current prices...";

/// Reply to `/channel` when no broadcast channel is configured.
pub const NO_CHANNEL_MESSAGE: &str = "ℹ️ No broadcast channel is configured.";

/// Command executor shared by every incoming message.
#[derive(Clone)]
pub struct TelegramControl {
    relay: Arc<Relay>,
    registry: Arc<ChatJobRegistry>,
    chat_schedule: JobSchedule,
    channel: Option<Destination>,
}

impl TelegramControl {
    #[must_use]
    pub fn new(
        relay: Arc<Relay>,
        registry: Arc<ChatJobRegistry>,
        chat_schedule: JobSchedule,
        channel: Option<Destination>,
    ) -> Self {
        Self {
            relay,
            registry,
            chat_schedule,
            channel,
        }
    }

    /// Execute one parsed command for `chat`.
    ///
    /// Failures are logged and answered with a best-effort apology; nothing
    /// propagates to the caller.
    pub async fn execute(&self, command: RelayCommand, chat: ChatId, user_name: &str) {
        info!(command = command.name(), chat_id = chat.0, user = user_name, "Telegram command");

        let result = match command {
            RelayCommand::Start => self.start(chat, user_name).await,
            RelayCommand::Stop => self.stop(chat).await,
            RelayCommand::Prices => self.prices(chat).await,
            RelayCommand::Channel => self.post_to_channel(chat).await,
            RelayCommand::Help => self.reply(chat, command_help()).await,
        };

        if let Err(e) = result {
            error!(command = command.name(), chat_id = chat.0, error = %e, "Command failed");
            let apology = self.apology(command);
            if let Err(e) = self.reply(chat, &apology).await {
                warn!(chat_id = chat.0, error = %e, "Failed to send apology");
            }
        }
    }

    /// Send plain text to `chat`.
    pub async fn reply(&self, chat: ChatId, text: &str) -> Result<()> {
        self.relay.send(&Destination::Chat(chat), text).await?;
        Ok(())
    }

    async fn start(&self, chat: ChatId, user_name: &str) -> Result<()> {
        let job_id = self
            .registry
            .start_or_replace(Destination::Chat(chat), self.chat_schedule)?;
        info!(chat_id = chat.0, %job_id, "Updates started");

        let welcome = render::welcome_text(
            user_name,
            self.relay.top_n(),
            self.chat_schedule,
            self.channel.as_ref(),
        );
        self.reply(chat, &welcome).await
    }

    async fn stop(&self, chat: ChatId) -> Result<()> {
        if self.registry.stop(&Destination::Chat(chat)) {
            self.reply(chat, STOPPED_MESSAGE).await
        } else {
            self.reply(chat, NOTHING_TO_STOP_MESSAGE).await
        }
    }

    async fn prices(&self, chat: ChatId) -> Result<()> {
        self.reply(chat, FETCHING_MESSAGE).await?;

        let outcome = self.relay.deliver_update(&Destination::Chat(chat)).await;
        if outcome != DeliveryOutcome::Sent {
            warn!(chat_id = chat.0, ?outcome, "Immediate update not delivered");
        }
        Ok(())
    }

    async fn post_to_channel(&self, chat: ChatId) -> Result<()> {
        let Some(channel) = &self.channel else {
            return self.reply(chat, NO_CHANNEL_MESSAGE).await;
        };

        self.reply(chat, &format!("🔄 Posting to {channel}...")).await?;

        let text = self.relay.snapshot().await;
        self.relay.send(channel, &text).await?;
        info!(%channel, "Posted update to channel");

        self.reply(chat, &format!("✅ Successfully posted to {channel}!"))
            .await
    }

    fn apology(&self, command: RelayCommand) -> String {
        match command {
            RelayCommand::Start => "❌ Error starting bot. Please try again.".to_string(),
            RelayCommand::Stop => "❌ Error stopping updates.".to_string(),
            RelayCommand::Prices => "❌ Error fetching prices.".to_string(),
            RelayCommand::Channel => match &self.channel {
                Some(channel) => format!(
                    "❌ Error posting to {channel}. Make sure the bot is an admin in the channel."
                ),
                None => "❌ Error posting to the channel.".to_string(),
            },
            RelayCommand::Help => "❌ Error showing help.".to_string(),
        }
    }
}
