//! Port traits implemented by the provider adapters

pub mod infrastructure;
pub mod providers;

pub use infrastructure::{DomainEventStream, EventBusProvider};
pub use providers::{CacheEntryConfig, CacheProvider, CacheStats};
