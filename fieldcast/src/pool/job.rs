//! Job identity and lifecycle types.

use std::fmt;
use std::time::Instant;

/// Identifier of the unit of work that must not run twice concurrently.
///
/// Keys are caller-defined. A single pool instance may carry more than one
/// job type, so callers namespace their keys (`kspb` for a station's
/// weather refresh, `kspb/cam0` for one of its cameras).
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct JobKey(String);

impl JobKey {
    /// Creates a new job key with the given string value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the string value of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JobKey({})", self.0)
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An admitted job waiting for a free slot.
///
/// Descriptors exist only between admission and worker start; a started
/// job is tracked by the pool's running list instead.
#[derive(Debug)]
pub struct JobDescriptor {
    /// Key guarding against duplicate concurrent runs.
    pub key: JobKey,

    /// Arguments handed to the worker invocation.
    pub args: Vec<String>,

    /// When the job was admitted to the pool.
    pub enqueued_at: Instant,
}

impl JobDescriptor {
    /// Creates a descriptor stamped with the current time.
    pub fn new(key: JobKey, args: Vec<String>) -> Self {
        Self {
            key,
            args,
            enqueued_at: Instant::now(),
        }
    }
}

/// Lifecycle state of a job.
///
/// `Queued → Running → {Completed | Failed | TimedOut}`. The three
/// right-hand states are terminal; there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Admitted, waiting for a free slot.
    Queued,
    /// Worker started, not yet terminal.
    Running,
    /// Worker returned success.
    Completed,
    /// Worker returned an error or panicked.
    Failed,
    /// Worker exceeded its deadline and was force-terminated.
    TimedOut,
}

impl JobState {
    /// Returns true for the three terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::TimedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_key_equality() {
        assert_eq!(JobKey::new("kspb"), JobKey::from("kspb"));
        assert_ne!(JobKey::new("kspb"), JobKey::new("kspb/cam0"));
    }

    #[test]
    fn test_job_key_display() {
        assert_eq!(format!("{}", JobKey::new("kspb/cam1")), "kspb/cam1");
    }

    #[test]
    fn test_descriptor_records_enqueue_time() {
        let before = Instant::now();
        let desc = JobDescriptor::new(JobKey::new("kspb"), vec!["weather".into()]);
        assert!(desc.enqueued_at >= before);
        assert_eq!(desc.args, vec!["weather".to_string()]);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!JobState::Queued.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(JobState::Completed.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(JobState::TimedOut.is_terminal());
    }
}
