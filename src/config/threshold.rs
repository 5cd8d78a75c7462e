//! Threshold persistence.
//!
//! The registration-age threshold is a single integer persisted through an
//! external key-value store. Reads never fail: absence, unreadable files,
//! and garbage values all fall back to the default of 30 days. Writers are
//! responsible for clearing the classification cache afterwards, since
//! every cached status depends on the threshold.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_THRESHOLD_DAYS;

/// Read/write access to the persisted registration-age threshold.
///
/// The core reads the threshold once per evaluation through this seam, so
/// implementations should be cheap to call repeatedly.
#[async_trait]
pub trait ThresholdStore: Send + Sync {
    /// Returns the configured threshold in days, or the default (30) when
    /// the value is absent or unreadable. Never errors.
    async fn threshold_days(&self) -> i64;

    /// Persists a new threshold value.
    async fn set_threshold_days(&self, days: i64) -> Result<()>;
}

/// On-disk shape of the threshold file.
#[derive(Debug, Serialize, Deserialize)]
struct ThresholdFile {
    #[serde(rename = "thresholdDays")]
    threshold_days: i64,
}

/// Threshold store backed by a small JSON file.
///
/// The file holds `{"thresholdDays": n}`. Any read failure (missing file,
/// bad JSON, non-positive value) silently yields the default.
#[derive(Debug)]
pub struct FileThresholdStore {
    path: PathBuf,
}

impl FileThresholdStore {
    /// Creates a store persisting to `path`. The file is created on the
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Option<i64> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let parsed: ThresholdFile = serde_json::from_str(&content).ok()?;
        // Non-positive values are treated as unset.
        (parsed.threshold_days > 0).then_some(parsed.threshold_days)
    }
}

#[async_trait]
impl ThresholdStore for FileThresholdStore {
    async fn threshold_days(&self) -> i64 {
        match self.read() {
            Some(days) => days,
            None => {
                log::debug!(
                    "No usable threshold at {}, using default of {} days",
                    self.path.display(),
                    DEFAULT_THRESHOLD_DAYS
                );
                DEFAULT_THRESHOLD_DAYS
            }
        }
    }

    async fn set_threshold_days(&self, days: i64) -> Result<()> {
        let content = serde_json::to_string_pretty(&ThresholdFile {
            threshold_days: days,
        })
        .context("Failed to serialize threshold")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write threshold file {}", self.path.display()))?;
        log::info!("Threshold set to {} days", days);
        Ok(())
    }
}

/// In-memory threshold store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryThresholdStore {
    days: Mutex<Option<i64>>,
}

impl MemoryThresholdStore {
    /// Creates a store pre-seeded with a threshold value.
    pub fn with_days(days: i64) -> Self {
        Self {
            days: Mutex::new(Some(days)),
        }
    }
}

#[async_trait]
impl ThresholdStore for MemoryThresholdStore {
    async fn threshold_days(&self) -> i64 {
        self.days
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .unwrap_or(DEFAULT_THRESHOLD_DAYS)
    }

    async fn set_threshold_days(&self, days: i64) -> Result<()> {
        *self.days.lock().unwrap_or_else(|e| e.into_inner()) = Some(days);
        Ok(())
    }
}
