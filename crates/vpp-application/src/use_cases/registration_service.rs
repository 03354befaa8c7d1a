//! Battery Registration Service Use Case
//!
//! Producer side of ingestion: validates a batch of registrations and
//! publishes one event per battery. Persistence happens asynchronously in
//! [`crate::BatteryConsumerService`].

use std::sync::Arc;
use tracing::{debug, info};
use vpp_domain::constants::BATTERY_TOPIC;
use vpp_domain::error::Result;
use vpp_domain::events::DomainEvent;
use vpp_domain::ports::EventBusProvider;
use vpp_domain::value_objects::BatteryRegistration;

/// Publishes battery registrations to the event bus
#[derive(Clone)]
pub struct BatteryRegistrationService {
    event_bus: Arc<dyn EventBusProvider>,
}

impl BatteryRegistrationService {
    /// Create a registration service publishing to `event_bus`
    pub fn new(event_bus: Arc<dyn EventBusProvider>) -> Self {
        Self { event_bus }
    }

    /// Validate and publish a batch of registrations
    ///
    /// The whole batch is validated before anything is published.
    pub async fn register_batteries(&self, batteries: Vec<BatteryRegistration>) -> Result<String> {
        info!("Processing registration of {} batteries", batteries.len());
        for battery in &batteries {
            battery.validate()?;
        }

        let count = batteries.len();
        for battery in batteries {
            debug!("Sending battery to {}: {:?}", BATTERY_TOPIC, battery);
            self.event_bus
                .publish_event(DomainEvent::BatteryRegistered { battery })
                .await?;
        }

        info!("All {} batteries sent to {}", count, BATTERY_TOPIC);
        Ok(format!("Successfully registered {count} batteries"))
    }
}

impl std::fmt::Debug for BatteryRegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatteryRegistrationService")
            .field("event_bus", &self.event_bus.provider_name())
            .finish()
    }
}
