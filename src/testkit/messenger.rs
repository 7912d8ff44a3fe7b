//! Recording [`Messenger`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::Destination;
use crate::error::SendError;
use crate::port::Messenger;

/// Thread-safe message collector.
///
/// Successful sends are recorded in order. The first `failures` sends fail
/// with a network error and are not recorded; sends to a rejected
/// destination always fail.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(Destination, String)>>,
    failures: AtomicUsize,
    always_fail: bool,
    rejected: Option<Destination>,
    attempts: AtomicUsize,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messenger whose first `failures` sends fail.
    pub fn failing_first(failures: usize) -> Self {
        Self {
            failures: AtomicUsize::new(failures),
            ..Self::default()
        }
    }

    /// Messenger whose sends always fail.
    pub fn always_failing() -> Self {
        Self {
            always_fail: true,
            ..Self::default()
        }
    }

    /// Messenger that rejects every send to `destination`.
    pub fn rejecting(destination: Destination) -> Self {
        Self {
            rejected: Some(destination),
            ..Self::default()
        }
    }

    /// All delivered messages in order.
    pub fn sent(&self) -> Vec<(Destination, String)> {
        self.sent.lock().clone()
    }

    /// Delivered texts for one destination.
    pub fn sent_to(&self, destination: &Destination) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(to, _)| to == destination)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Number of send attempts, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, destination: &Destination, text: &str) -> Result<(), SendError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.rejected.as_ref() == Some(destination) {
            return Err(SendError::Rejected("chat not found".into()));
        }
        let should_fail = self.always_fail
            || self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();
        if should_fail {
            return Err(SendError::Network("simulated outage".into()));
        }
        self.sent.lock().push((destination.clone(), text.to_string()));
        Ok(())
    }
}
