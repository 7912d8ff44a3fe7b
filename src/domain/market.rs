//! Market snapshot types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Stable coin excluded from every summary by default.
pub const STABLECOIN_SYMBOL: &str = "USDT";

/// Number of entries kept from each fetch by default.
pub const DEFAULT_TOP_N: usize = 5;

/// One asset in a market snapshot.
///
/// Produced fresh on every fetch and never persisted. Within a single
/// [`FetchResult`] the symbol is the only identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketEntry {
    name: String,
    symbol: String,
    current_price: Decimal,
    day_change_percent: Decimal,
}

impl MarketEntry {
    /// Create an entry. The symbol is uppercased and a negative price is
    /// clamped to zero.
    pub fn new(
        name: impl Into<String>,
        symbol: impl AsRef<str>,
        current_price: Decimal,
        day_change_percent: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.as_ref().to_uppercase(),
            current_price: current_price.max(Decimal::ZERO),
            day_change_percent,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn current_price(&self) -> Decimal {
        self.current_price
    }

    /// Signed 24h price change in percent.
    #[must_use]
    pub fn day_change_percent(&self) -> Decimal {
        self.day_change_percent
    }
}

/// Ordered top-N slice of a provider response.
///
/// An empty result means "no data available"; it is how fetch failures are
/// reported, so callers must treat it as the failure case.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchResult(Vec<MarketEntry>);

impl FetchResult {
    /// The "no data available" result.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Drop excluded symbols and keep the first `limit` entries in provider
    /// order.
    ///
    /// Symbols are compared case-insensitively.
    #[must_use]
    pub fn select(entries: Vec<MarketEntry>, excluded: &[String], limit: usize) -> Self {
        let selected = entries
            .into_iter()
            .filter(|entry| {
                !excluded
                    .iter()
                    .any(|symbol| symbol.eq_ignore_ascii_case(entry.symbol()))
            })
            .take(limit)
            .collect();
        Self(selected)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[MarketEntry] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a FetchResult {
    type Item = &'a MarketEntry;
    type IntoIter = std::slice::Iter<'a, MarketEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
