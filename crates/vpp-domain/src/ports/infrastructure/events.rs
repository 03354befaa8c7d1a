//! Event Bus Provider Port
//!
//! Decouples battery registration from persistence. Registration publishes
//! [`DomainEvent`]s; the consumer subscribes and persists them.

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Boxed async stream of domain events
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send + 'static>>;

/// Event bus provider interface for typed event pub/sub
///
/// Delivery is at-most-once per subscriber; exactly-once processing is
/// assumed by consumers, not enforced here.
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish a typed domain event to all current subscribers
    async fn publish_event(&self, event: DomainEvent) -> Result<()>;

    /// Subscribe to receive typed domain events
    ///
    /// Only events published after the call are delivered.
    async fn subscribe_events(&self) -> Result<DomainEventStream>;

    /// Check if there are any active event subscribers
    fn has_subscribers(&self) -> bool;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
