//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving adapters: the command-line interface
//! - [`outbound`] - Driven adapters: CoinGecko client, Telegram bot

pub mod inbound;
pub mod outbound;
