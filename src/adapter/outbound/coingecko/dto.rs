//! CoinGecko REST response types.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::MarketEntry;

/// One element of the `coins/markets` response array.
///
/// Only the fields the relay renders are decoded. The provider sends `null`
/// for prices and changes it has no data for.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,
}

impl CoinMarket {
    /// Convert into a domain entry; coins without a symbol are skipped.
    #[must_use]
    pub fn into_entry(self) -> Option<MarketEntry> {
        let symbol = self.symbol.filter(|s| !s.trim().is_empty())?;
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        Some(MarketEntry::new(
            name,
            symbol,
            self.current_price.unwrap_or(Decimal::ZERO),
            self.price_change_percentage_24h.unwrap_or(Decimal::ZERO),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decodes_provider_payload() {
        let json = r#"[
            {
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "current_price": 67234.12,
                "market_cap": 1324000000000,
                "price_change_percentage_24h": -1.25
            },
            {
                "id": "shiba-inu",
                "symbol": "shib",
                "name": "Shiba Inu",
                "current_price": 0.00001723,
                "price_change_percentage_24h": 0.5
            }
        ]"#;

        let markets: Vec<CoinMarket> = serde_json::from_str(json).unwrap();
        let entries: Vec<_> = markets.into_iter().filter_map(CoinMarket::into_entry).collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol(), "BTC");
        assert_eq!(entries[0].current_price(), dec!(67234.12));
        assert_eq!(entries[0].day_change_percent(), dec!(-1.25));
        assert_eq!(entries[1].current_price(), dec!(0.00001723));
    }

    #[test]
    fn nulls_default_to_zero() {
        let json = r#"{"symbol": "new", "name": "New Coin",
            "current_price": null, "price_change_percentage_24h": null}"#;

        let entry = serde_json::from_str::<CoinMarket>(json)
            .unwrap()
            .into_entry()
            .unwrap();

        assert_eq!(entry.current_price(), Decimal::ZERO);
        assert_eq!(entry.day_change_percent(), Decimal::ZERO);
    }

    #[test]
    fn missing_name_is_unknown() {
        let json = r#"{"symbol": "abc", "current_price": 1}"#;
        let entry = serde_json::from_str::<CoinMarket>(json)
            .unwrap()
            .into_entry()
            .unwrap();
        assert_eq!(entry.name(), "Unknown");
    }

    #[test]
    fn missing_symbol_is_skipped() {
        let json = r#"{"name": "Mystery", "current_price": 1}"#;
        let market: CoinMarket = serde_json::from_str(json).unwrap();
        assert!(market.into_entry().is_none());
    }
}
