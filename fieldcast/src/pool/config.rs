//! Pool configuration with clamped ranges.

use std::time::Duration;

/// Default number of worker slots.
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Hard limits for `pool_size`; values outside are clamped.
///
/// The ceiling bounds load on upstream weather/camera sources as well as
/// local I/O; a single display site never needs more.
pub const MIN_POOL_SIZE: usize = 1;
pub const MAX_POOL_SIZE: usize = 32;

/// Default per-job timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Hard limits for `timeout_seconds`; values outside are clamped.
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Controller polling interval.
///
/// The control loop only ever blocks on this short sleep; it never waits
/// unboundedly on a single worker.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Configuration for a [`WorkerPool`](super::WorkerPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of simultaneously running workers.
    pub pool_size: usize,

    /// Per-job deadline, measured from the moment the worker actually
    /// starts (not from admission).
    pub timeout: Duration,
}

impl PoolConfig {
    /// Creates a configuration, clamping both values to their sane ranges.
    pub fn new(pool_size: usize, timeout_secs: u64) -> Self {
        Self {
            pool_size: pool_size.clamp(MIN_POOL_SIZE, MAX_POOL_SIZE),
            timeout: Duration::from_secs(timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)),
        }
    }

    /// Overrides the timeout with sub-second precision.
    ///
    /// Intended for tests; the config file only carries whole seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_TIMEOUT_SECS)
    }
}
