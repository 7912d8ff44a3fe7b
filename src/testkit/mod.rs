//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for market entries and realistic provider lists.
//! - [`market`] - [`StubMarketSource`](market::StubMarketSource), a scripted
//!   [`MarketSource`](crate::port::MarketSource).
//! - [`messenger`] - [`RecordingMessenger`](messenger::RecordingMessenger),
//!   a [`Messenger`](crate::port::Messenger) that records or fails sends.

pub mod domain;
pub mod market;
pub mod messenger;
