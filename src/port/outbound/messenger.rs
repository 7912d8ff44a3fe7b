//! Chat messenger port.

use async_trait::async_trait;

use crate::domain::Destination;
use crate::error::SendError;

/// Sends plain-text messages to chats and channels.
///
/// Implementations must be thread-safe (`Send + Sync`): job tasks and
/// command handlers share one messenger.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver `text` to `destination`.
    async fn send_text(&self, destination: &Destination, text: &str) -> Result<(), SendError>;
}
