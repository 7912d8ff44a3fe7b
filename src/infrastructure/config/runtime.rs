//! Process runtime configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Process-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    /// PID file guarding against a second instance polling the same bot.
    #[serde(default)]
    pub pid_file: Option<PathBuf>,
}
