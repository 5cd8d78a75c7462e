//! Evaluation orchestrator.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use url::Url;

use crate::alert::AlertSink;
use crate::cache::{ClassificationCache, Clock, SystemClock};
use crate::classify::{classify, Classification, Status};
use crate::config::{Config, FileThresholdStore, ThresholdStore};
use crate::domain::{is_exempt, root_domain};
use crate::error_handling::InitializationError;
use crate::rdap::{RdapClient, RegistrationLookup};

/// Composes lookup, threshold, cache, and classification into the single
/// `evaluate` operation collaborators call.
///
/// Individual evaluations are independent async operations and may
/// overlap; the cache is the only shared state and takes last-write-wins
/// writes. Two concurrent evaluations of the same uncached domain will
/// both perform the lookup — duplicate external calls are accepted, not
/// collapsed.
pub struct DomainChecker {
    lookup: Arc<dyn RegistrationLookup>,
    thresholds: Arc<dyn ThresholdStore>,
    alerts: Arc<dyn AlertSink>,
    cache: ClassificationCache,
    clock: Arc<dyn Clock>,
}

impl DomainChecker {
    /// Creates a checker from explicit collaborators.
    pub fn new(
        lookup: Arc<dyn RegistrationLookup>,
        thresholds: Arc<dyn ThresholdStore>,
        alerts: Arc<dyn AlertSink>,
        cache_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lookup,
            thresholds,
            alerts,
            cache: ClassificationCache::new(cache_ttl, clock.clone()),
            clock,
        }
    }

    /// Creates a production checker: RDAP lookup, file-backed threshold,
    /// wall clock.
    pub fn from_config(
        config: &Config,
        alerts: Arc<dyn AlertSink>,
    ) -> Result<Self, InitializationError> {
        let lookup = Arc::new(RdapClient::from_config(config)?);
        let thresholds = Arc::new(FileThresholdStore::new(config.threshold_file.clone()));
        Ok(Self::new(
            lookup,
            thresholds,
            alerts,
            config.cache_ttl,
            Arc::new(SystemClock),
        ))
    }

    /// Evaluates a normalized root domain.
    ///
    /// Consults the cache first; on a miss performs the lookup, reads the
    /// current threshold, classifies, stores, and returns. Idempotent per
    /// TTL window: repeated calls within the window return the cached
    /// record without I/O. A failed lookup is cached as `unknown` for the
    /// full TTL.
    ///
    /// Performs no exemption check: callers apply [`is_exempt`] first, so
    /// exempt domains never populate the cache.
    pub async fn evaluate(&self, domain: &str) -> Classification {
        if let Some(hit) = self.cache.get(domain) {
            log::debug!("Cache hit for {}", domain);
            return hit;
        }

        let creation_date = self.lookup.registration_date(domain).await;
        let threshold_days = self.thresholds.threshold_days().await;
        let classification = classify(domain, creation_date, threshold_days, self.clock.now());

        log::info!(
            "{} classified {} (age: {}, threshold: {} days)",
            domain,
            classification.status,
            classification
                .age_days
                .map_or_else(|| "unknown".to_string(), |d| format!("{} days", d)),
            threshold_days
        );

        self.cache.put(classification.clone());
        classification
    }

    /// Runs the full navigation-event path for a URL.
    ///
    /// Non-web URLs (anything but http/https, or unparseable input) yield
    /// `None`. The hostname is collapsed to its root domain; exempt
    /// domains short-circuit to an uncached `safe` record. Everything
    /// else is evaluated, and a `danger` verdict is pushed to the alert
    /// sink.
    pub async fn check_navigation(&self, raw_url: &str) -> Option<Classification> {
        let parsed = Url::parse(raw_url).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            log::debug!("Ignoring non-web URL {}", raw_url);
            return None;
        }
        let host = parsed.host_str()?;

        // IP-literal hosts would be mangled by label collapsing, so the
        // raw host is tested before normalization.
        if is_exempt(host) {
            log::debug!("{} is exempt from checking", host);
            return Some(Classification::exempt(host, self.clock.now()));
        }

        let domain = root_domain(host);
        if is_exempt(&domain) {
            log::debug!("{} is exempt from checking", domain);
            return Some(Classification::exempt(&domain, self.clock.now()));
        }

        let classification = self.evaluate(&domain).await;
        if classification.status == Status::Danger {
            self.alerts.notify_danger(&classification).await;
        }
        Some(classification)
    }

    /// Current threshold in days (default 30 when unset or unreadable).
    pub async fn threshold(&self) -> i64 {
        self.thresholds.threshold_days().await
    }

    /// Persists a new threshold and clears the cache, since every cached
    /// status was computed against the old value.
    pub async fn set_threshold(&self, days: i64) -> Result<()> {
        self.thresholds.set_threshold_days(days).await?;
        self.cache.clear();
        Ok(())
    }

    /// Number of cached classifications, stale entries included.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}
