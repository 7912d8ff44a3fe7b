use std::time::Duration;

/// Smallest interval a job may repeat at.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Timing of a repeating job: first firing after `initial_delay`, then every
/// `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSchedule {
    initial_delay: Duration,
    interval: Duration,
}

impl JobSchedule {
    /// Create a schedule. A zero interval is raised to one millisecond.
    #[must_use]
    pub fn new(initial_delay: Duration, interval: Duration) -> Self {
        Self {
            initial_delay,
            interval: interval.max(MIN_INTERVAL),
        }
    }

    /// Per-chat default: first update after 3 seconds, then every minute.
    #[must_use]
    pub fn chat_default() -> Self {
        Self::new(Duration::from_secs(3), Duration::from_secs(60))
    }

    /// Broadcast channel default: immediately, then every 2 minutes.
    #[must_use]
    pub fn channel_default() -> Self {
        Self::new(Duration::ZERO, Duration::from_secs(120))
    }

    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for JobSchedule {
    fn default() -> Self {
        Self::chat_default()
    }
}
