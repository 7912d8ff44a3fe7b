//! Platform-agnostic domain types.

mod destination;
mod market;
mod schedule;

pub use destination::{ChannelTarget, ChatId, Destination, JobId};
pub use market::{FetchResult, MarketEntry, DEFAULT_TOP_N, STABLECOIN_SYMBOL};
pub use schedule::JobSchedule;
