//! Use case implementations
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`BatteryQueryService`] | Cache-aside range aggregates |
//! | [`IngestInvalidator`] | Selective invalidation after a write |
//! | [`BatteryRegistrationService`] | Publishes registrations to the event bus |
//! | [`BatteryConsumerService`] | Persists registrations and triggers invalidation |

pub mod consumer_service;
pub mod invalidation_service;
pub mod query_service;
pub mod registration_service;

pub use consumer_service::BatteryConsumerService;
pub use invalidation_service::{IngestInvalidator, InvalidationReport};
pub use query_service::BatteryQueryService;
pub use registration_service::BatteryRegistrationService;
