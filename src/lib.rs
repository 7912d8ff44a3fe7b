//! Coinrelay - scheduled cryptocurrency price updates for Telegram chats.
//!
//! A user sends `/start` to the bot and receives the top cryptocurrencies by
//! market capitalization on a fixed interval until they send `/stop`.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Market entries, destinations, job schedules
//! - [`port`] - Traits for the market data source and the chat messenger
//! - [`application`] - Fetcher, formatter, relay and the per-chat job registry
//! - [`adapter`] - CoinGecko client, Telegram bot, CLI
//! - [`infrastructure`] - Configuration, bootstrap, single-instance guard
//! - [`error`] - Error types for the crate
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

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
