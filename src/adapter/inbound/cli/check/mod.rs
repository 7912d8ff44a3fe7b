//! Configuration and credential validation command handlers.

pub mod config;
pub mod telegram;
