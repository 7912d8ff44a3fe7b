//! Path utilities for coinrelay.
//!
//! The default configuration lives at `~/.coinrelay/config.toml`.

use std::path::PathBuf;

/// Returns the coinrelay home directory (`~/.coinrelay/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".coinrelay")
}

/// Returns the default config file path (`~/.coinrelay/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
