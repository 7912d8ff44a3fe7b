//! Fetch, render and deliver one market update.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::Destination;
use crate::error::SendError;
use crate::port::Messenger;

use super::fetcher::MarketDataFetcher;
use super::format::MessageFormatter;

/// Text sent when delivering an update failed.
pub const FALLBACK_MESSAGE: &str = "❌ Error updating crypto prices. Will retry soon.";

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The update reached the destination.
    Sent,
    /// The update failed but the apology was delivered.
    FallbackSent,
    /// Neither the update nor the apology was delivered.
    Dropped,
}

/// The update pipeline shared by scheduled jobs and on-demand commands.
pub struct Relay {
    fetcher: MarketDataFetcher,
    formatter: MessageFormatter,
    messenger: Arc<dyn Messenger>,
}

impl Relay {
    #[must_use]
    pub fn new(
        fetcher: MarketDataFetcher,
        formatter: MessageFormatter,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            fetcher,
            formatter,
            messenger,
        }
    }

    /// Maximum number of entries in an update.
    #[must_use]
    pub fn top_n(&self) -> usize {
        self.fetcher.limit()
    }

    /// Fetch and render one summary without sending it.
    pub async fn snapshot(&self) -> String {
        let entries = self.fetcher.fetch().await;
        self.formatter.render_now(&entries)
    }

    /// Send arbitrary text through the relay's messenger.
    pub async fn send(&self, destination: &Destination, text: &str) -> Result<(), SendError> {
        self.messenger.send_text(destination, text).await
    }

    /// Fetch, render and send one update to `destination`.
    ///
    /// A failed send is followed by a single apology attempt for chats.
    /// Errors are logged here and never returned.
    pub async fn deliver_update(&self, destination: &Destination) -> DeliveryOutcome {
        let text = self.snapshot().await;

        let Err(e) = self.send(destination, &text).await else {
            info!(%destination, "Market update sent");
            return DeliveryOutcome::Sent;
        };

        error!(%destination, error = %e, "Failed to send market update");

        if !destination.wants_fallback() {
            return DeliveryOutcome::Dropped;
        }

        match self.send(destination, FALLBACK_MESSAGE).await {
            Ok(()) => DeliveryOutcome::FallbackSent,
            Err(e) => {
                warn!(%destination, error = %e, "Failed to send error notice");
                DeliveryOutcome::Dropped
            }
        }
    }
}
