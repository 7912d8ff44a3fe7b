//! Configuration modules.

pub mod logging;
pub mod market;
pub mod runtime;
pub mod schedule;
pub mod settings;
pub mod telegram;
