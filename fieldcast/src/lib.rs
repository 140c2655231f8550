//! Fieldcast - near-real-time weather and webcam displays for small airports.
//!
//! This library provides the refresh core behind the public display
//! service: a bounded worker pool that periodically fans out per-station
//! and per-camera refresh jobs, and a staging-and-promotion cache
//! primitive that publishes fetched artifacts atomically into a directory
//! read concurrently by the display frontends.
//!
//! # Overview
//!
//! ```ignore
//! use std::sync::Arc;
//! use fieldcast::jobs::{FileSource, RefreshWorker};
//! use fieldcast::pool::{PoolConfig, WorkerPool};
//!
//! let worker = RefreshWorker::new("cache", Arc::new(FileSource::new("spool")));
//! let mut pool = WorkerPool::new(PoolConfig::default(), Arc::new(worker));
//!
//! pool.add_job("kspb", vec!["weather".into(), "kspb".into()]);
//! pool.add_job("kspb/cam0", vec!["camera".into(), "kspb".into(), "0".into()]);
//!
//! let stats = pool.drain().await;
//! println!("refresh finished: {stats}");
//! ```
//!
//! Readers of the cache directory need no coordination: every canonical
//! path is only ever replaced by an atomic rename, so a read at any
//! instant yields one complete artifact generation.

pub mod cache;
pub mod config;
pub mod jobs;
pub mod logging;
pub mod pool;

/// Version of the Fieldcast library and CLI.
///
/// Synchronized across all workspace members via the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
