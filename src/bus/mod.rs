//! Topic-scoped publish/subscribe bus.
//!
//! In-process fan-out delivery of aggregated change batches:
//!   - Topics are plain strings; a subscription covers any set of topics
//!   - `topic(name).emit(batch)` delivers to every current subscriber
//!   - Delivery channels are unbounded and `send` never blocks, so emitting
//!     is safe from a synchronous document-observer callback
//!
//! Receivers are consumed asynchronously; a closed receiver is skipped at
//! delivery time and removed when its subscription is dropped explicitly.

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::mpsc;

use crate::document::ChangeMap;
use crate::types::{Error, Result, SubscriberId};

// =============================================================================
// Message Types
// =============================================================================

/// A change batch as delivered to subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Topic the batch was published on.
    pub topic: String,

    /// Aggregated key -> action map for one translator invocation.
    pub batch: ChangeMap,

    /// Publication time, milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

// =============================================================================
// Subscriber Management
// =============================================================================

/// Per-topic sender registered for one subscription.
#[derive(Debug)]
struct Subscriber {
    id: SubscriberId,
    tx: mpsc::UnboundedSender<Notification>,
}

/// Subscription receipt, used to unsubscribe.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: SubscriberId,
    pub topics: Vec<String>,
}

/// Bus usage counters.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BusStats {
    pub batches_published: u64,
    pub active_subscriptions: usize,
}

// =============================================================================
// TopicBus - In-Memory Topic Bus
// =============================================================================

/// In-memory topic bus with fan-out delivery.
///
/// The subscriber table uses a synchronous lock: publishing happens inside
/// engine observer callbacks that cannot await.
#[derive(Debug, Default)]
pub struct TopicBus {
    /// Topic name -> subscribers listening on it.
    subscribers: RwLock<HashMap<String, Vec<Subscriber>>>,

    /// Usage counters.
    stats: RwLock<BusStats>,
}

impl TopicBus {
    /// Create a new TopicBus instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow-scoped handle for emitting on a single topic.
    pub fn topic(&self, name: &str) -> Topic<'_> {
        Topic {
            bus: self,
            name: name.to_string(),
        }
    }

    /// Subscribe to a set of topics.
    ///
    /// Returns (subscription receipt, receiver channel). One receiver serves
    /// every topic in the set; notifications carry the topic they arrived on.
    pub fn subscribe(
        &self,
        topics: Vec<String>,
    ) -> Result<(Subscription, mpsc::UnboundedReceiver<Notification>)> {
        if topics.is_empty() {
            return Err(Error::validation("subscription needs at least one topic"));
        }
        if topics.iter().any(String::is_empty) {
            return Err(Error::validation("topic name cannot be empty"));
        }

        let id = SubscriberId::new();
        let (tx, rx) = mpsc::unbounded_channel();

        let mut subscribers = self.subscribers.write();
        for topic in &topics {
            subscribers.entry(topic.clone()).or_default().push(Subscriber {
                id: id.clone(),
                tx: tx.clone(),
            });
        }
        drop(subscribers);

        self.stats.write().active_subscriptions += 1;

        tracing::debug!(id = %id, ?topics, "subscribed");

        Ok((Subscription { id, topics }, rx))
    }

    /// Remove a subscription from every topic it registered for. Idempotent.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        let mut subscribers = self.subscribers.write();
        let mut removed = false;
        for topic in &subscription.topics {
            if let Some(subs) = subscribers.get_mut(topic) {
                let before = subs.len();
                subs.retain(|s| s.id != subscription.id);
                removed |= subs.len() != before;
            }
        }
        drop(subscribers);

        if removed {
            let mut stats = self.stats.write();
            stats.active_subscriptions = stats.active_subscriptions.saturating_sub(1);
        }

        tracing::debug!(id = %subscription.id, "unsubscribed");
    }

    /// Get current bus statistics.
    pub fn stats(&self) -> BusStats {
        self.stats.read().clone()
    }

    /// Deliver a batch to every subscriber of `topic`.
    ///
    /// Fan-out is fire-and-forget: a subscriber whose receiver has been
    /// dropped is skipped. Returns the delivered count.
    fn publish(&self, topic: &str, batch: ChangeMap) -> usize {
        let notification = Notification {
            topic: topic.to_string(),
            batch,
            timestamp_ms: Utc::now().timestamp_millis(),
        };

        let subscribers = self.subscribers.read();
        let listening = subscribers.get(topic).map(Vec::as_slice).unwrap_or(&[]);

        let mut delivered = 0;
        for subscriber in listening {
            if subscriber.tx.send(notification.clone()).is_ok() {
                delivered += 1;
            }
        }
        drop(subscribers);

        self.stats.write().batches_published += 1;

        tracing::debug!(
            topic,
            delivered,
            entries = notification.batch.len(),
            "published change batch"
        );

        delivered
    }
}

/// Emit handle scoped to one topic.
#[derive(Debug)]
pub struct Topic<'a> {
    bus: &'a TopicBus,
    name: String,
}

impl Topic<'_> {
    /// Publish one aggregated change batch on this topic.
    ///
    /// Synchronous and non-blocking; returns how many subscribers received
    /// the batch.
    pub fn emit(&self, batch: ChangeMap) -> usize {
        self.bus.publish(&self.name, batch)
    }
}

// =============================================================================
// Tests
// =============================================================================
