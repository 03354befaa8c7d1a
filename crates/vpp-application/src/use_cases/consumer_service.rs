//! Battery Consumer Service Use Case
//!
//! Consumer side of ingestion: persists registered batteries and, for each
//! successful write, dispatches a detached invalidation sweep.

use crate::use_cases::invalidation_service::{IngestInvalidator, InvalidationReport};
use futures::StreamExt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use vpp_domain::entities::Battery;
use vpp_domain::error::Result;
use vpp_domain::events::DomainEvent;
use vpp_domain::ports::{DomainEventStream, EventBusProvider};
use vpp_domain::repositories::BatteryRepository;
use vpp_domain::value_objects::BatteryRegistration;

/// Persists battery registrations delivered by the event bus
#[derive(Clone)]
pub struct BatteryConsumerService {
    repository: Arc<dyn BatteryRepository>,
    invalidator: Arc<IngestInvalidator>,
}

impl BatteryConsumerService {
    /// Create a consumer writing to `repository`
    pub fn new(repository: Arc<dyn BatteryRepository>, invalidator: Arc<IngestInvalidator>) -> Self {
        Self {
            repository,
            invalidator,
        }
    }

    /// Persist one registration
    ///
    /// On success the invalidation sweep is spawned and its handle returned;
    /// dropping the handle leaves the sweep running. Persistence failures
    /// are logged and yield `None`.
    pub async fn consume(
        &self,
        registration: BatteryRegistration,
    ) -> Option<JoinHandle<InvalidationReport>> {
        info!("Received battery event: {:?}", registration);
        match self.repository.save(Battery::from(registration)).await {
            Ok(saved) => {
                info!("Battery saved successfully: {:?}", saved.id);
                Some(self.invalidator.spawn(saved.to_ingested_record()))
            }
            Err(e) => {
                error!("Error saving battery: {}", e);
                None
            }
        }
    }

    /// Consume events until the stream ends, returning how many
    /// registrations were persisted
    ///
    /// Registrations whose save failed are not counted.
    pub async fn run(&self, mut events: DomainEventStream) -> usize {
        let mut persisted = 0;
        while let Some(event) = events.next().await {
            match event {
                DomainEvent::BatteryRegistered { battery } => {
                    if self.consume(battery).await.is_some() {
                        persisted += 1;
                    }
                }
                other => debug!("Ignoring event: {:?}", other),
            }
        }
        persisted
    }

    /// Subscribe to `event_bus` and run the consumer on a detached task
    ///
    /// The subscription is taken before this returns, so every event
    /// published afterwards is delivered.
    pub async fn spawn(
        self: Arc<Self>,
        event_bus: &dyn EventBusProvider,
    ) -> Result<JoinHandle<usize>> {
        let events = event_bus.subscribe_events().await?;
        Ok(tokio::spawn(async move { self.run(events).await }))
    }
}

impl std::fmt::Debug for BatteryConsumerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatteryConsumerService")
            .field("invalidator", &self.invalidator)
            .finish_non_exhaustive()
    }
}
