//! Null event bus provider

use async_trait::async_trait;
use futures::stream;
use vpp_domain::error::Result;
use vpp_domain::events::DomainEvent;
use vpp_domain::ports::{DomainEventStream, EventBusProvider};

/// Event bus that drops every event and never delivers any
///
/// Registrations succeed but are never persisted; useful when only the
/// query side is exercised.
#[derive(Debug, Clone, Default)]
pub struct NullEventBusProvider;

impl NullEventBusProvider {
    /// Create a new null event bus
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventBusProvider for NullEventBusProvider {
    async fn publish_event(&self, _event: DomainEvent) -> Result<()> {
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        Ok(Box::pin(stream::empty()))
    }

    fn has_subscribers(&self) -> bool {
        false
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
