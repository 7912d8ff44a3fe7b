//! Application services (use cases).
//!
//! These services combine domain types with the ports to implement the
//! relay: fetch a snapshot, render it, deliver it, and keep one repeating
//! job per destination.

pub mod fetcher;
pub mod format;
pub mod registry;
pub mod relay;

pub use fetcher::MarketDataFetcher;
pub use format::MessageFormatter;
pub use registry::ChatJobRegistry;
pub use relay::{DeliveryOutcome, Relay};
