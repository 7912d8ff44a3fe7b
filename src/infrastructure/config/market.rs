//! Market data provider configuration.

use serde::Deserialize;

use crate::domain::{DEFAULT_TOP_N, STABLECOIN_SYMBOL};

/// CoinGecko `coins/markets` endpoint.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Market data provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Markets endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Quote currency requested from the provider.
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,
    /// Page size requested from the provider (before filtering).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Entries kept per update.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Symbols never shown (case-insensitive).
    #[serde(default = "default_excluded_symbols")]
    pub excluded_symbols: Vec<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Demo API key, loaded from `COINGECKO_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_vs_currency() -> String {
    "usd".to_string()
}

const fn default_per_page() -> u32 {
    10
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_excluded_symbols() -> Vec<String> {
    vec![STABLECOIN_SYMBOL.to_string()]
}

const fn default_timeout_secs() -> u64 {
    15
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            vs_currency: default_vs_currency(),
            per_page: default_per_page(),
            top_n: default_top_n(),
            excluded_symbols: default_excluded_symbols(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}
