//! Tokio Channel Event Bus Provider
//!
//! In-process event distribution over bounded tokio mpsc channels, one per
//! subscriber. This is the hand-off between battery registration and
//! persistence.
//!
//! Publishing waits for room in every live subscriber's channel, so a slow
//! consumer slows the producer down instead of losing events.
//!
//! ## Example
//!
//! ```ignore
//! use vpp_providers::events::TokioEventBusProvider;
//!
//! let bus = TokioEventBusProvider::new();
//! let stream = bus.subscribe_events().await?;
//! bus.publish_event(DomainEvent::BatteryRegistered { battery }).await?;
//! ```

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;
use async_trait::async_trait;
use futures::stream;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use tracing::debug;
use vpp_domain::error::{Error, Result};
use vpp_domain::events::DomainEvent;
use vpp_domain::ports::{DomainEventStream, EventBusProvider};

type Subscribers = Vec<mpsc::Sender<DomainEvent>>;

/// Event bus provider using bounded tokio mpsc channels
///
/// Every subscriber gets its own channel of `capacity` events. Events are
/// not persisted: only subscribers present at publish time receive them.
/// Subscriber streams end once every clone of the bus is dropped.
#[derive(Clone)]
pub struct TokioEventBusProvider {
    subscribers: Arc<Mutex<Subscribers>>,
    capacity: usize,
}

impl TokioEventBusProvider {
    /// Create a new tokio event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Create with custom per-subscriber capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "event bus capacity must be greater than 0");
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
            capacity,
        }
    }

    /// Get the current number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.lock()
            .map_or(0, |subscribers| {
                subscribers.iter().filter(|tx| !tx.is_closed()).count()
            })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Subscribers>> {
        self.subscribers
            .lock()
            .map_err(|_| Error::event_bus("Subscriber list lock poisoned"))
    }
}

impl Default for TokioEventBusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventBusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventBusProvider")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[async_trait]
impl EventBusProvider for TokioEventBusProvider {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        // Senders are cloned out so the lock is not held across `send`
        let targets: Subscribers = self.lock()?.clone();
        if targets.is_empty() {
            debug!("Published event but no subscribers");
            return Ok(());
        }

        let mut delivered = 0;
        for tx in &targets {
            if tx.send(event.clone()).await.is_ok() {
                delivered += 1;
            }
        }

        if delivered < targets.len() {
            self.lock()?.retain(|tx| !tx.is_closed());
        }
        debug!("Published event to {} subscribers", delivered);
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        let (tx, rx) = mpsc::channel(self.capacity);
        self.lock()?.push(tx);

        let stream = stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|event| (event, rx))
        });

        Ok(Box::pin(stream))
    }

    fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    fn provider_name(&self) -> &str {
        "tokio"
    }
}
