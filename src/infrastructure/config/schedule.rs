//! Per-chat update schedule configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::JobSchedule;

/// Timing of the updates a chat receives after `/start`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Delay before the first update (default: 3).
    #[serde(default = "default_initial_delay_secs")]
    pub initial_delay_secs: u64,
    /// Seconds between updates (default: 60).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_initial_delay_secs() -> u64 {
    3
}

const fn default_interval_secs() -> u64 {
    60
}

impl ScheduleConfig {
    #[must_use]
    pub fn job_schedule(&self) -> JobSchedule {
        JobSchedule::new(
            Duration::from_secs(self.initial_delay_secs),
            Duration::from_secs(self.interval_secs),
        )
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            initial_delay_secs: default_initial_delay_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}
