//! Main application configuration

use super::{CacheConfig, EventBusConfig, LoggingConfig, QueryConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Aggregate cache configuration
    pub cache: CacheConfig,

    /// Event bus configuration
    pub event_bus: EventBusConfig,

    /// Query defaults
    pub query: QueryConfig,
}
