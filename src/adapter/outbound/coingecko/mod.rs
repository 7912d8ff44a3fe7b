//! CoinGecko market data adapter.
//!
//! Implements [`MarketSource`](crate::port::MarketSource) against the public
//! `coins/markets` endpoint.

pub mod client;
pub mod dto;

pub use client::CoinGeckoClient;
