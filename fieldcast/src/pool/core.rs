//! The worker pool controller.
//!
//! Bounds concurrency, admits or rejects jobs, starts and reaps workers,
//! enforces per-job deadlines and aggregates run statistics. The control
//! logic is single-threaded: it polls on a short fixed interval rather
//! than blocking indefinitely on any one worker, so a hung worker can
//! never stall the run past its timeout budget.

use super::config::{PoolConfig, POLL_INTERVAL};
use super::inflight::InFlightSet;
use super::job::{JobDescriptor, JobKey};
use super::stats::PoolStats;
use super::worker::{Worker, WorkerContext, WorkerError};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A started worker that has not yet reached a terminal state.
struct RunningWorker {
    key: JobKey,
    handle: JoinHandle<Result<(), WorkerError>>,
    cancel: CancellationToken,
    started_at: Instant,
    deadline: Instant,
}

/// Bounded pool of concurrently running workers.
///
/// [`add_job`](Self::add_job) is the only admission path. Jobs whose key is
/// already in flight are rejected and counted as skipped; admitted jobs
/// start immediately when a slot is free and queue FIFO otherwise.
/// [`drain`](Self::drain) runs the controller loop to completion.
///
/// Must be used from within a tokio runtime; workers run as spawned tasks.
pub struct WorkerPool {
    config: PoolConfig,
    worker: Arc<dyn Worker>,
    in_flight: InFlightSet,
    queued: VecDeque<JobDescriptor>,
    running: Vec<RunningWorker>,
    stats: PoolStats,
}

impl WorkerPool {
    /// Creates a pool that executes every admitted job with `worker`.
    pub fn new(config: PoolConfig, worker: Arc<dyn Worker>) -> Self {
        Self {
            config,
            worker,
            in_flight: InFlightSet::new(),
            queued: VecDeque::new(),
            running: Vec::new(),
            stats: PoolStats::new(),
        }
    }

    /// Admits a job, or rejects it if its key is already in flight.
    ///
    /// Returns false (and increments `skipped`) for a duplicate key — a
    /// previous run for that key has not finished yet, typically because
    /// an upstream source is slow. This is not an error condition.
    pub fn add_job(&mut self, key: impl Into<JobKey>, args: Vec<String>) -> bool {
        let key = key.into();

        if !self.in_flight.insert(key.clone()) {
            self.stats.record_skipped();
            debug!(%key, "job already in flight, skipping");
            return false;
        }

        let descriptor = JobDescriptor::new(key, args);
        if self.running.len() < self.config.pool_size {
            self.start_worker(descriptor);
        } else {
            debug!(key = %descriptor.key, "pool full, queueing job");
            self.queued.push_back(descriptor);
        }
        true
    }

    /// Runs the controller loop until every admitted and queued job has
    /// reached a terminal state, then returns the run statistics.
    ///
    /// Each polling cycle reaps exited workers, force-terminates workers
    /// past their deadline and promotes queued jobs into freed slots. A
    /// single job's failure never aborts the drain.
    pub async fn drain(&mut self) -> PoolStats {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        while !self.running.is_empty() || !self.queued.is_empty() {
            ticker.tick().await;
            self.reap_finished().await;
            self.kill_expired().await;
            self.fill_free_slots();
        }

        self.stats
    }

    /// Terminates any still-running workers and clears all pending state.
    ///
    /// Jobs terminated here are abandoned without a recorded outcome.
    /// Safe to call on an already-drained pool, where it is a no-op.
    pub async fn cleanup(&mut self) {
        for worker in self.running.drain(..) {
            warn!(key = %worker.key, "cleanup terminating running worker");
            worker.cancel.cancel();
            worker.handle.abort();
            let _ = worker.handle.await;
        }
        self.queued.clear();
        self.in_flight.clear();
    }

    /// Read-only snapshot of the run counters.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Number of workers currently running.
    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Number of admitted jobs waiting for a slot.
    pub fn queued_count(&self) -> usize {
        self.queued.len()
    }

    /// Spawns a worker task for an admitted job.
    ///
    /// The deadline is measured from this moment, not from admission: a
    /// job that sat in the queue still gets its full timeout budget.
    fn start_worker(&mut self, descriptor: JobDescriptor) {
        let cancel = CancellationToken::new();
        let ctx = WorkerContext::new(descriptor.key.clone(), cancel.clone());
        let worker = Arc::clone(&self.worker);
        let args = descriptor.args;

        let handle = tokio::spawn(async move { worker.run(&ctx, &args).await });

        let started_at = Instant::now();
        debug!(
            key = %descriptor.key,
            queued_ms = descriptor.enqueued_at.elapsed().as_millis() as u64,
            "worker started"
        );
        self.running.push(RunningWorker {
            key: descriptor.key,
            handle,
            cancel,
            started_at,
            deadline: started_at + self.config.timeout,
        });
    }

    /// Harvests workers whose task has exited and records their outcome.
    async fn reap_finished(&mut self) {
        let mut i = 0;
        while i < self.running.len() {
            if !self.running[i].handle.is_finished() {
                i += 1;
                continue;
            }

            let worker = self.running.swap_remove(i);
            let elapsed = worker.started_at.elapsed();
            match worker.handle.await {
                Ok(Ok(())) => {
                    debug!(key = %worker.key, elapsed_ms = elapsed.as_millis() as u64, "job completed");
                    self.stats.record_completed();
                }
                Ok(Err(err)) => {
                    warn!(key = %worker.key, error = %err, "job failed");
                    self.stats.record_failed();
                }
                Err(join_err) => {
                    // A panic inside the worker counts as a failure; it
                    // must not abort the rest of the run.
                    warn!(key = %worker.key, error = %join_err, "worker task aborted unexpectedly");
                    self.stats.record_failed();
                }
            }
            self.in_flight.remove(&worker.key);
        }
    }

    /// Force-terminates workers past their deadline.
    ///
    /// Termination is unconditional: the token is cancelled for workers
    /// that care to observe it, and the task is aborted regardless. The
    /// job is counted `timed_out`, never `failed` or `completed`.
    async fn kill_expired(&mut self) {
        let now = Instant::now();
        let mut i = 0;
        while i < self.running.len() {
            if now < self.running[i].deadline || self.running[i].handle.is_finished() {
                i += 1;
                continue;
            }

            let worker = self.running.swap_remove(i);
            warn!(
                key = %worker.key,
                elapsed_ms = worker.started_at.elapsed().as_millis() as u64,
                "worker exceeded timeout, force-terminating"
            );
            worker.cancel.cancel();
            worker.handle.abort();
            let _ = worker.handle.await;
            self.stats.record_timed_out();
            self.in_flight.remove(&worker.key);
        }
    }

    /// Promotes queued jobs into freed slots, oldest first.
    fn fill_free_slots(&mut self) {
        while self.running.len() < self.config.pool_size {
            match self.queued.pop_front() {
                Some(descriptor) => self.start_worker(descriptor),
                None => break,
            }
        }
    }
}
