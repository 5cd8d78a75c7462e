//! Classification cache with lazy TTL expiry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::classify::Classification;

/// Source of the current time.
///
/// Injected into the cache and the orchestrator so TTL and age arithmetic
/// are deterministic under test.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A hand-driven clock for tests.
///
/// Starts at a fixed instant and only moves when told to, making cache
/// expiry and age boundaries reproducible.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += chrono::Duration::from_std(step).unwrap_or(chrono::Duration::zero());
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Per-domain memo of classification results.
///
/// One entry per normalized root domain, last write wins. Entries whose
/// age reaches the TTL are reported absent but left in place until the
/// next store replaces them (lazy expiry). Unbounded for the lifetime of
/// the process; a threshold change clears it wholesale because every
/// stored status was computed against the old threshold.
pub struct ClassificationCache {
    entries: Mutex<HashMap<String, Classification>>,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl ClassificationCache {
    /// Creates a cache with the given TTL and clock source.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(4)),
            clock,
        }
    }

    /// Returns the fresh entry for `domain`, if any.
    ///
    /// An entry whose age is greater than or equal to the TTL counts as
    /// absent.
    pub fn get(&self, domain: &str) -> Option<Classification> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(domain)?;
        let age = self.clock.now().signed_duration_since(entry.checked_at);
        if age >= self.ttl {
            log::debug!("Cache entry for {} is stale ({}s old)", domain, age.num_seconds());
            return None;
        }
        Some(entry.clone())
    }

    /// Stores a classification, replacing any previous entry for its
    /// domain.
    pub fn put(&self, classification: Classification) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(classification.domain.clone(), classification);
    }

    /// Removes every entry. Called whenever the threshold changes.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let dropped = entries.len();
        entries.clear();
        if dropped > 0 {
            log::debug!("Cleared {} cached classifications", dropped);
        }
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
