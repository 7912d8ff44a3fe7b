//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets such as the bot token
//! come only from environment variables.
//!
//! # Example
//!
//! ```no_run
//! use coinrelay::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::market::MarketConfig;
use super::runtime::RuntimeConfig;
use super::schedule::ScheduleConfig;
use super::telegram::TelegramAppConfig;
use crate::domain::{ChannelTarget, Destination};
use crate::error::{ConfigError, Result};

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the optional CoinGecko demo API key.
pub const MARKET_API_KEY_ENV: &str = "COINGECKO_API_KEY";

/// Largest page size the markets endpoint accepts.
const MAX_PER_PAGE: u32 = 250;

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Market data provider settings.
    #[serde(default)]
    pub market: MarketConfig,

    /// Per-chat update timing.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Process-level settings.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

fn env_secret(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the bot token from `TELEGRAM_BOT_TOKEN` and the market API key
    /// from `COINGECKO_API_KEY` (never from the config file).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Defaults plus environment secrets, for running without a config file.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        self.telegram.bot_token = env_secret(BOT_TOKEN_ENV);
        self.market.api_key = env_secret(MARKET_API_KEY_ENV);
    }

    /// Return the bot token or a missing-field error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `TELEGRAM_BOT_TOKEN` is unset.
    pub fn require_bot_token(&self) -> Result<&str> {
        self.telegram
            .bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: BOT_TOKEN_ENV }.into())
    }

    /// The configured broadcast channel as a destination.
    #[must_use]
    pub fn channel_destination(&self) -> Option<Destination> {
        self.telegram
            .channel
            .as_ref()
            .and_then(|channel| ChannelTarget::parse(&channel.name))
            .map(Destination::Channel)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let market = &self.market;
        if market.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = url::Url::parse(&market.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if market.vs_currency.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "vs_currency",
            }
            .into());
        }
        if market.per_page == 0 || market.per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                field: "per_page",
                reason: format!("must be between 1 and {MAX_PER_PAGE}"),
            }
            .into());
        }
        if market.top_n == 0 || market.top_n > market.per_page as usize {
            return Err(ConfigError::InvalidValue {
                field: "top_n",
                reason: "must be between 1 and per_page".to_string(),
            }
            .into());
        }
        if market.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.schedule.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if let Some(channel) = &self.telegram.channel {
            if ChannelTarget::parse(&channel.name).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "channel.name",
                    reason: "must be an @username or a numeric chat id".to_string(),
                }
                .into());
            }
            if channel.interval_secs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "channel.interval_secs",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
