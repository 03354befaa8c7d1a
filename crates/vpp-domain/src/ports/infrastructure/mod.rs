//! Infrastructure ports

pub mod events;

pub use events::{DomainEventStream, EventBusProvider};
