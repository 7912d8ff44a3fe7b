//! Scripted [`MarketSource`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::MarketEntry;
use crate::error::FetchError;
use crate::port::MarketSource;

/// A market source that returns a fixed list or fails every call.
pub struct StubMarketSource {
    entries: Option<Vec<MarketEntry>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubMarketSource {
    /// Source that always returns `entries`.
    pub fn returning(entries: Vec<MarketEntry>) -> Self {
        Self {
            entries: Some(entries),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Source whose every call fails with HTTP 503.
    pub fn failing() -> Self {
        Self {
            entries: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep for `delay` before answering each call.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketSource for StubMarketSource {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn top_markets(&self) -> Result<Vec<MarketEntry>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.entries {
            Some(entries) => Ok(entries.clone()),
            None => Err(FetchError::Status { status: 503 }),
        }
    }
}
