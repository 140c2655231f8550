//! Worker invocation contract.
//!
//! A worker executes exactly one job's fetch-and-process cycle and returns.
//! Workers are stateless across invocations: nothing persists between runs
//! except what is durably written through the staging primitive. A worker
//! never mutates a canonical cache path directly.
//!
//! [`WorkerContext`] can only be constructed by the pool, so a worker
//! cannot be run outside pool-managed invocation. The pool's exit contract
//! is the `Result`: `Ok` counts the job as completed, `Err` as failed.
//! Workers must not emit the pool-level summary; that output is reserved
//! for the controller.

use super::job::JobKey;
use crate::cache::CacheError;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors surfaced by a worker invocation.
///
/// Any variant counts the job as `failed`; timeouts are recorded by the
/// controller, not by the worker.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Worker invoked with arguments it cannot interpret
    #[error("Invalid worker arguments: {0}")]
    InvalidArgs(String),

    /// Upstream fetch failed
    #[error("Fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Staging or promotion failed
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Worker observed cancellation before publishing
    #[error("Worker cancelled before publishing")]
    Cancelled,
}

/// Per-invocation context issued by the pool.
///
/// The constructor is crate-private on purpose: a context only exists for
/// a pool-admitted job, which makes direct worker invocation fail fast at
/// compile time rather than at runtime.
pub struct WorkerContext {
    key: JobKey,
    cancel: CancellationToken,
}

impl WorkerContext {
    pub(crate) fn new(key: JobKey, cancel: CancellationToken) -> Self {
        Self { key, cancel }
    }

    /// Key of the job this invocation belongs to.
    pub fn key(&self) -> &JobKey {
        &self.key
    }

    /// True once the controller has decided to terminate this worker.
    ///
    /// Termination is forceful; checking this is an optional courtesy that
    /// lets a worker skip publishing work that is about to be discarded.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// One self-contained fetch-and-process cycle.
pub trait Worker: Send + Sync + 'static {
    /// Short descriptive name for logging ("WeatherRefresh").
    fn name(&self) -> &str;

    /// Runs the cycle for one job.
    ///
    /// All durable output must pass through
    /// [`cache::write_staged`](crate::cache::write_staged) /
    /// [`promote`](crate::cache::StagedArtifact::promote).
    fn run<'a>(
        &'a self,
        ctx: &'a WorkerContext,
        args: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<(), WorkerError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_reports_cancellation() {
        let token = CancellationToken::new();
        let ctx = WorkerContext::new(JobKey::new("kspb"), token.clone());

        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_context_exposes_job_key() {
        let ctx = WorkerContext::new(JobKey::new("kspb/cam0"), CancellationToken::new());
        assert_eq!(ctx.key().as_str(), "kspb/cam0");
    }
}
