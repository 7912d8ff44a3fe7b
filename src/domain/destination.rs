//! Delivery targets and job identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Messaging platform chat identifier.
///
/// Private chats are positive, groups and supergroups are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A broadcast channel, addressed by public `@username` or numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChannelTarget {
    Username(String),
    Id(ChatId),
}

impl ChannelTarget {
    /// Parse a configured channel: `@name` or a numeric id such as
    /// `-1001234567890`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() > 1 && raw.starts_with('@') {
            return Some(Self::Username(raw.to_string()));
        }
        raw.parse().ok().map(|id| Self::Id(ChatId(id)))
    }
}

impl fmt::Display for ChannelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(name) => write!(f, "{name}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Where a relay job delivers its updates.
///
/// A channel stays a channel even when addressed by numeric id, so it never
/// shares a registry key or the fallback policy with a chat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// A private or group chat.
    Chat(ChatId),
    /// A broadcast channel.
    Channel(ChannelTarget),
}

impl Destination {
    /// Channel addressed by `@username`.
    #[must_use]
    pub fn channel(username: impl Into<String>) -> Self {
        Self::Channel(ChannelTarget::Username(username.into()))
    }

    /// Whether a failed update should be followed by an apology message.
    ///
    /// Channels are public, so failures are only logged there.
    #[must_use]
    pub fn wants_fallback(&self) -> bool {
        matches!(self, Self::Chat(_))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat(id) => write!(f, "chat:{id}"),
            Self::Channel(target) => write!(f, "{target}"),
        }
    }
}

impl From<ChatId> for Destination {
    fn from(id: ChatId) -> Self {
        Self::Chat(id)
    }
}

/// Unique identifier of one scheduled job.
///
/// A replaced job gets a fresh id, which keeps log lines from the old and new
/// task distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(uuid::Uuid);

impl JobId {
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
