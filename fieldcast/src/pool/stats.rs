//! Scheduling-run statistics.

use std::fmt;

/// Monotonically increasing counters for one scheduling run.
///
/// Exactly one of `completed`, `failed` or `timed_out` is incremented per
/// admitted job, exactly once, at its terminal transition. `skipped` counts
/// admissions rejected by the duplicate guard so operators can distinguish
/// intentionally avoided duplicate work from genuine failures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Jobs whose worker exited successfully.
    pub completed: u64,
    /// Jobs whose worker returned an error or panicked.
    pub failed: u64,
    /// Jobs force-terminated for exceeding their deadline.
    pub timed_out: u64,
    /// Admissions rejected because the key was already in flight.
    pub skipped: u64,
}

impl PoolStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful worker exit.
    pub fn record_completed(&mut self) {
        self.completed += 1;
    }

    /// Records a worker failure.
    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Records a force-terminated worker.
    pub fn record_timed_out(&mut self) {
        self.timed_out += 1;
    }

    /// Records a duplicate admission.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Total number of jobs that reached a terminal state.
    pub fn total_terminal(&self) -> u64 {
        self.completed + self.failed + self.timed_out
    }
}

impl fmt::Display for PoolStats {
    /// Operator-facing end-of-run summary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} completed, {} failed, {} timed out, {} skipped",
            self.completed, self.failed, self.timed_out, self.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = PoolStats::new();
        assert_eq!(stats.total_terminal(), 0);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_record_methods_increment_once() {
        let mut stats = PoolStats::new();
        stats.record_completed();
        stats.record_failed();
        stats.record_timed_out();
        stats.record_skipped();
        stats.record_completed();

        assert_eq!(stats.completed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.timed_out, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.total_terminal(), 4);
    }

    #[test]
    fn test_display_summary() {
        let mut stats = PoolStats::new();
        stats.record_completed();
        stats.record_timed_out();

        assert_eq!(
            format!("{}", stats),
            "1 completed, 0 failed, 1 timed out, 0 skipped"
        );
    }
}
