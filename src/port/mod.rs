//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where adapters plug in external systems:
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │       Application        │
//!    ┌────────────┤  fetcher, relay, jobs    ├────────────┐
//!    │            └──────────────────────────┘            │
//!    ▼                                                    ▼
//! ┌──────────────┐                                 ┌────────────┐
//! │ MarketSource │                                 │ Messenger  │
//! │  (CoinGecko) │                                 │ (Telegram) │
//! └──────────────┘                                 └────────────┘
//! ```

pub mod outbound;

pub use outbound::market::MarketSource;
pub use outbound::messenger::Messenger;
