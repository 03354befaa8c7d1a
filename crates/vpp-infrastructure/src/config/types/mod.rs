//! Configuration types module

pub mod app;
pub mod cache;
pub mod event_bus;
pub mod logging;
pub mod query;

// Re-export main types
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use event_bus::{EventBusConfig, EventBusProviderKind};
pub use logging::LoggingConfig;
pub use query::QueryConfig;
