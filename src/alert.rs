//! Outbound danger notifications.
//!
//! When the navigation path produces a `danger` classification, the full
//! record is pushed to an [`AlertSink`] so a renderer (banner, badge,
//! desktop notification) can react. Delivery is fire-and-forget: a sink
//! with nobody attached swallows the alert rather than erroring or
//! retrying.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::classify::Classification;

/// Receiver of danger classifications.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Delivers a danger classification. Must not fail; implementations
    /// swallow delivery problems.
    async fn notify_danger(&self, classification: &Classification);
}

/// Sink that surfaces alerts in the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn notify_danger(&self, classification: &Classification) {
        match classification.age_days {
            Some(age) => log::warn!(
                "Recently registered domain: {} ({} days old)",
                classification.domain,
                age
            ),
            None => log::warn!("Recently registered domain: {}", classification.domain),
        }
    }
}

/// Sink that fans alerts out over a tokio broadcast channel.
///
/// Subscribers attach with [`BroadcastAlertSink::subscribe`]. Sending with
/// no subscriber attached is the normal "renderer not ready yet" case and
/// is dropped silently.
#[derive(Debug, Clone)]
pub struct BroadcastAlertSink {
    tx: broadcast::Sender<Classification>,
}

impl BroadcastAlertSink {
    /// Creates a sink buffering up to `capacity` undelivered alerts per
    /// subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Attaches a new subscriber receiving every subsequent alert.
    pub fn subscribe(&self) -> broadcast::Receiver<Classification> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl AlertSink for BroadcastAlertSink {
    async fn notify_danger(&self, classification: &Classification) {
        if self.tx.send(classification.clone()).is_err() {
            log::debug!(
                "No alert subscriber attached, dropping alert for {}",
                classification.domain
            );
        }
    }
}
