//! Market data source port.

use async_trait::async_trait;

use crate::domain::MarketEntry;
use crate::error::FetchError;

/// A provider of market snapshots ordered by market capitalization.
///
/// Implementations perform exactly one request per call and report every
/// failure as a [`FetchError`]; retrying is left to the next scheduled fetch.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Provider name used in log fields.
    fn name(&self) -> &'static str;

    /// Fetch the provider's top markets in market-cap-descending order.
    async fn top_markets(&self) -> Result<Vec<MarketEntry>, FetchError>;
}
