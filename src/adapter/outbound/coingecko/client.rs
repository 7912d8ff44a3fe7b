//! CoinGecko REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::dto::CoinMarket;
use crate::domain::MarketEntry;
use crate::error::FetchError;
use crate::infrastructure::config::market::MarketConfig;
use crate::port::MarketSource;

/// Header carrying a CoinGecko demo API key.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// HTTP client for the CoinGecko `coins/markets` endpoint.
///
/// Issues one request per fetch with no retries; the relay simply waits for
/// the next scheduled update.
pub struct CoinGeckoClient {
    http: HttpClient,
    api_url: String,
    vs_currency: String,
    per_page: u32,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    /// Build a client whose requests are bounded by `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn from_config(config: &MarketConfig) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            vs_currency: config.vs_currency.clone(),
            per_page: config.per_page,
            api_key: config.api_key.clone(),
        })
    }

    /// Query parameters: top `per_page` by market cap, first page, no
    /// sparkline.
    fn query(&self) -> [(&'static str, String); 5] {
        [
            ("vs_currency", self.vs_currency.clone()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", "1".to_string()),
            ("sparkline", "false".to_string()),
        ]
    }
}

#[async_trait]
impl MarketSource for CoinGeckoClient {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn top_markets(&self) -> Result<Vec<MarketEntry>, FetchError> {
        let mut request = self.http.get(&self.api_url).query(&self.query());
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(FetchError::from_reqwest)?;
        let status = response.status();
        debug!(status = status.as_u16(), "Market data response");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let markets: Vec<CoinMarket> = response.json().await.map_err(FetchError::from_reqwest)?;
        Ok(markets
            .into_iter()
            .filter_map(CoinMarket::into_entry)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requests_top_page_by_market_cap() {
        let client = CoinGeckoClient::from_config(&MarketConfig::default()).unwrap();

        let query = client.query();

        assert_eq!(query[0], ("vs_currency", "usd".to_string()));
        assert_eq!(query[1], ("order", "market_cap_desc".to_string()));
        assert_eq!(query[2], ("per_page", "10".to_string()));
        assert_eq!(query[3], ("page", "1".to_string()));
        assert_eq!(query[4], ("sparkline", "false".to_string()));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let config = MarketConfig {
            api_url: "http://127.0.0.1:9/api/v3/coins/markets".to_string(),
            timeout_secs: 2,
            ..MarketConfig::default()
        };
        let client = CoinGeckoClient::from_config(&config).unwrap();

        let result = client.top_markets().await;

        assert!(matches!(
            result,
            Err(FetchError::Transport(_) | FetchError::Timeout)
        ));
    }
}
