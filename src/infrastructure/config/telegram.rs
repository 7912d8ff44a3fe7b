//! Telegram bot configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{ChatId, JobSchedule};

/// Telegram bot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API token, loaded from `TELEGRAM_BOT_TOKEN`.
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// Chats allowed to use the bot. Empty allows every chat.
    #[serde(default)]
    pub allowed_chats: Vec<i64>,
    /// Lines appended to every market summary.
    #[serde(default)]
    pub footer: Vec<String>,
    /// Optional broadcast channel.
    #[serde(default)]
    pub channel: Option<ChannelConfig>,
}

impl TelegramAppConfig {
    #[must_use]
    pub fn allowed_chat_ids(&self) -> Vec<ChatId> {
        self.allowed_chats.iter().copied().map(ChatId).collect()
    }
}

/// Broadcast channel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Channel `@username` or numeric chat id.
    pub name: String,
    /// Post updates to the channel on a schedule (default: false).
    #[serde(default)]
    pub auto_post: bool,
    /// Delay before the first automatic post (default: 0).
    #[serde(default)]
    pub initial_delay_secs: u64,
    /// Seconds between automatic posts (default: 120).
    #[serde(default = "default_channel_interval_secs")]
    pub interval_secs: u64,
}

const fn default_channel_interval_secs() -> u64 {
    120
}

impl ChannelConfig {
    #[must_use]
    pub fn job_schedule(&self) -> JobSchedule {
        JobSchedule::new(
            Duration::from_secs(self.initial_delay_secs),
            Duration::from_secs(self.interval_secs),
        )
    }
}
