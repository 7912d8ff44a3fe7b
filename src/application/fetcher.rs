//! Market snapshot fetching with failures folded into an empty result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{FetchResult, DEFAULT_TOP_N, STABLECOIN_SYMBOL};
use crate::port::MarketSource;

/// Fetches the top-N market entries from a [`MarketSource`].
///
/// Never returns an error: every failure is logged and reported as an empty
/// [`FetchResult`].
pub struct MarketDataFetcher {
    source: Arc<dyn MarketSource>,
    excluded_symbols: Vec<String>,
    limit: usize,
}

impl MarketDataFetcher {
    /// Create a fetcher that excludes `USDT` and keeps five entries.
    #[must_use]
    pub fn new(source: Arc<dyn MarketSource>) -> Self {
        Self::with_selection(source, vec![STABLECOIN_SYMBOL.to_string()], DEFAULT_TOP_N)
    }

    #[must_use]
    pub fn with_selection(
        source: Arc<dyn MarketSource>,
        excluded_symbols: Vec<String>,
        limit: usize,
    ) -> Self {
        Self {
            source,
            excluded_symbols,
            limit,
        }
    }

    /// Maximum number of entries per result.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Perform one fetch.
    pub async fn fetch(&self) -> FetchResult {
        let source = self.source.name();
        info!(source, "Fetching market data");

        match self.source.top_markets().await {
            Ok(entries) => {
                let received = entries.len();
                let result = FetchResult::select(entries, &self.excluded_symbols, self.limit);
                info!(source, received, kept = result.len(), "Market data fetched");
                result
            }
            Err(e) => {
                warn!(source, error = %e, "Market data fetch failed");
                FetchResult::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{entry, top_ten};
    use crate::testkit::market::StubMarketSource;

    #[tokio::test]
    async fn fetch_excludes_stablecoin_and_truncates() {
        let fetcher = MarketDataFetcher::new(Arc::new(StubMarketSource::returning(top_ten())));

        let result = fetcher.fetch().await;

        let symbols: Vec<_> = result.iter().map(|e| e.symbol()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "BNB", "SOL", "USDC"]);
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_result() {
        let source = Arc::new(StubMarketSource::failing());
        let fetcher = MarketDataFetcher::new(source.clone());

        let result = fetcher.fetch().await;

        assert!(result.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn custom_selection_is_applied() {
        let source = StubMarketSource::returning(top_ten());
        let fetcher = MarketDataFetcher::with_selection(
            Arc::new(source),
            vec!["USDT".into(), "USDC".into()],
            3,
        );

        let result = fetcher.fetch().await;

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|e| e.symbol() != "USDC"));
    }

    #[tokio::test]
    async fn short_provider_list_is_kept_whole() {
        let source = StubMarketSource::returning(vec![
            entry("Bitcoin", "btc", "1", "0"),
            entry("Tether", "usdt", "1", "0"),
        ]);
        let fetcher = MarketDataFetcher::new(Arc::new(source));

        assert_eq!(fetcher.fetch().await.len(), 1);
    }
}
