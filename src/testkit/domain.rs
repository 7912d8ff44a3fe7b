//! Builders for domain primitives used across tests.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::MarketEntry;

/// Create a [`MarketEntry`] from string decimals.
///
/// # Panics
///
/// Panics if `price` or `change` are not valid decimals.
pub fn entry(name: &str, symbol: &str, price: &str, change: &str) -> MarketEntry {
    MarketEntry::new(
        name,
        symbol,
        Decimal::from_str(price).expect("valid price"),
        Decimal::from_str(change).expect("valid change"),
    )
}

/// A top-10 list shaped like a real provider response, with USDT third.
pub fn top_ten() -> Vec<MarketEntry> {
    vec![
        entry("Bitcoin", "btc", "67234.12", "1.52"),
        entry("Ethereum", "eth", "3456.78", "-0.84"),
        entry("Tether", "usdt", "1.0001", "0.01"),
        entry("BNB", "bnb", "589.4", "0"),
        entry("Solana", "sol", "145.23", "3.1"),
        entry("USDC", "usdc", "0.9999", "-0.01"),
        entry("XRP", "xrp", "0.523456", "2.25"),
        entry("Dogecoin", "doge", "0.1234", "-4.5"),
        entry("Toncoin", "ton", "7.12", "0.33"),
        entry("Cardano", "ada", "0.45", "-1.2"),
    ]
}
