//! Duplicate-job guard.
//!
//! A mutex-guarded set of job keys with a live worker. A key is present iff
//! exactly one job for it is currently queued or running. Insertion happens
//! once at admission and removal exactly once at the terminal transition;
//! a leak here would make a key un-schedulable forever.

use super::job::JobKey;
use std::collections::HashSet;
use std::sync::Mutex;

/// Concurrency-safe set of in-flight job keys.
#[derive(Debug, Default)]
pub struct InFlightSet {
    keys: Mutex<HashSet<JobKey>>,
}

impl InFlightSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key, returning false if it was already present.
    ///
    /// A false return means a previous job for this key has not reached a
    /// terminal state yet; the caller must not start another.
    pub fn insert(&self, key: JobKey) -> bool {
        self.keys.lock().unwrap_or_else(|e| e.into_inner()).insert(key)
    }

    /// Removes a key, returning true if it was present.
    pub fn remove(&self, key: &JobKey) -> bool {
        self.keys.lock().unwrap_or_else(|e| e.into_inner()).remove(key)
    }

    /// Returns true if the key currently has a live job.
    pub fn contains(&self, key: &JobKey) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }

    /// Number of keys currently in flight.
    pub fn len(&self) -> usize {
        self.keys.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if no keys are in flight.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key.
    pub fn clear(&self) {
        self.keys.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate() {
        let set = InFlightSet::new();
        assert!(set.insert(JobKey::new("kspb")));
        assert!(!set.insert(JobKey::new("kspb")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_frees_key_for_reinsertion() {
        let set = InFlightSet::new();
        let key = JobKey::new("kspb");

        assert!(set.insert(key.clone()));
        assert!(set.remove(&key));
        assert!(!set.remove(&key));
        assert!(set.insert(key));
    }

    #[test]
    fn test_distinct_keys_do_not_interfere() {
        let set = InFlightSet::new();
        assert!(set.insert(JobKey::new("kspb")));
        assert!(set.insert(JobKey::new("kspb/cam0")));
        assert!(set.contains(&JobKey::new("kspb")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clear_empties_set() {
        let set = InFlightSet::new();
        set.insert(JobKey::new("a"));
        set.insert(JobKey::new("b"));
        set.clear();
        assert!(set.is_empty());
    }
}
