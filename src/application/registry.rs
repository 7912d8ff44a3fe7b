//! Per-destination repeating job lifecycle.
//!
//! Each active job is one tokio task that fires [`Relay::deliver_update`] on
//! its schedule. The registry maps every destination to the cancellation
//! handle of its task and guarantees at most one active job per destination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::domain::{Destination, JobId, JobSchedule};
use crate::error::SchedulingError;

use super::relay::Relay;

/// Handle to a running job task.
struct JobHandle {
    id: JobId,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl JobHandle {
    /// Stop future firings. An in-flight firing runs to completion.
    fn cancel(self) -> JobId {
        let _ = self.shutdown.send(());
        drop(self.task);
        self.id
    }
}

/// Registry of repeating relay jobs keyed by destination.
pub struct ChatJobRegistry {
    relay: Arc<Relay>,
    jobs: DashMap<Destination, JobHandle>,
    closed: AtomicBool,
}

impl ChatJobRegistry {
    #[must_use]
    pub fn new(relay: Arc<Relay>) -> Self {
        Self {
            relay,
            jobs: DashMap::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Start a job for `destination`, cancelling any job it already has.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_or_replace(
        &self,
        destination: Destination,
        schedule: JobSchedule,
    ) -> Result<JobId, SchedulingError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(SchedulingError::RegistryClosed);
        }

        let id = JobId::new();
        let handle = spawn_job(id, destination.clone(), schedule, self.relay.clone());

        if let Some(previous) = self.jobs.insert(destination.clone(), handle) {
            let replaced = previous.cancel();
            info!(%destination, job_id = %replaced, "Removed existing job");
        }

        // A shutdown that ran between the check above and the insert has
        // already drained the map; undo our insert so nothing outlives it.
        if self.closed.load(Ordering::Acquire) {
            if let Some((_, handle)) = self.jobs.remove(&destination) {
                handle.cancel();
            }
            return Err(SchedulingError::RegistryClosed);
        }

        info!(
            %destination,
            job_id = %id,
            initial_delay_ms = schedule.initial_delay().as_millis() as u64,
            interval_secs = schedule.interval().as_secs(),
            "Scheduled relay job"
        );
        Ok(id)
    }

    /// Cancel the job for `destination`. Returns whether one was active.
    pub fn stop(&self, destination: &Destination) -> bool {
        match self.jobs.remove(destination) {
            Some((_, handle)) => {
                let id = handle.cancel();
                info!(%destination, job_id = %id, "Stopped relay job");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_active(&self, destination: &Destination) -> bool {
        self.jobs.contains_key(destination)
    }

    /// Id of the job currently registered for `destination`.
    #[must_use]
    pub fn job_id(&self, destination: &Destination) -> Option<JobId> {
        self.jobs.get(destination).map(|job| job.id)
    }

    /// Number of active jobs.
    #[must_use]
    pub fn active_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Cancel every job and refuse new ones. Returns how many were cancelled.
    pub fn shutdown(&self) -> usize {
        self.closed.store(true, Ordering::Release);

        let destinations: Vec<Destination> =
            self.jobs.iter().map(|job| job.key().clone()).collect();

        let cancelled = destinations
            .iter()
            .filter_map(|destination| self.jobs.remove(destination))
            .map(|(_, handle)| handle.cancel())
            .count();

        info!(cancelled, "Job registry shut down");
        cancelled
    }
}

/// Spawn the task driving one job.
fn spawn_job(
    id: JobId,
    destination: Destination,
    schedule: JobSchedule,
    relay: Arc<Relay>,
) -> JobHandle {
    let (shutdown, mut shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let start = Instant::now() + schedule.initial_delay();
        let mut ticker = interval_at(start, schedule.interval());
        // Firings run inline, so a slow firing delays the next tick instead
        // of overlapping it.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        debug!(%destination, job_id = %id, "Job task starting");

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown_rx => break,
                _ = ticker.tick() => {
                    let outcome = relay.deliver_update(&destination).await;
                    debug!(%destination, job_id = %id, ?outcome, "Job fired");
                }
            }
        }

        debug!(%destination, job_id = %id, "Job task terminated");
    });

    JobHandle { id, shutdown, task }
}
