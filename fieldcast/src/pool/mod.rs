//! Bounded worker pool for periodic refresh jobs.
//!
//! The pool fans out per-station and per-camera refresh jobs to concurrent
//! workers while protecting upstream sources and local resources:
//!
//! - **Bounded concurrency**: at most `pool_size` workers run at once;
//!   further admitted jobs queue FIFO. This is the sole admission-control
//!   mechanism.
//! - **Duplicate guard**: a schedule tick firing for a key whose previous
//!   job is still running is skipped, not doubled up.
//! - **Timeouts**: a worker that has not exited by `start + timeout` is
//!   force-terminated and counted `timed_out`.
//! - **Statistics**: exactly one of `{completed, failed, timed_out}` per
//!   admitted job, plus `skipped` for rejected duplicates.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fieldcast::pool::{PoolConfig, WorkerPool};
//!
//! let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
//! pool.add_job("kspb", vec!["weather".into(), "kspb".into()]);
//! pool.add_job("kspb/cam0", vec!["camera".into(), "kspb".into(), "0".into()]);
//! let stats = pool.drain().await;
//! println!("refresh finished: {stats}");
//! ```

mod config;
mod core;
mod inflight;
mod job;
mod stats;
mod worker;

pub use config::{
    PoolConfig, DEFAULT_POOL_SIZE, DEFAULT_TIMEOUT_SECS, MAX_POOL_SIZE, MAX_TIMEOUT_SECS,
    MIN_POOL_SIZE, MIN_TIMEOUT_SECS, POLL_INTERVAL,
};
pub use self::core::WorkerPool;
pub use inflight::InFlightSet;
pub use job::{JobDescriptor, JobKey, JobState};
pub use stats::PoolStats;
pub use worker::{Worker, WorkerContext, WorkerError};
