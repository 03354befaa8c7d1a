//! EventBus configuration types

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// EventBus provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusProviderKind {
    /// In-process bounded channels (Tokio)
    #[default]
    Tokio,
    /// Drops every event
    Null,
}

/// EventBus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBusConfig {
    /// EventBus provider to use
    pub provider: EventBusProviderKind,

    /// Number of events buffered per subscriber before publishing waits
    pub capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusProviderKind::Tokio,
            capacity: EVENT_BUS_DEFAULT_CAPACITY,
        }
    }
}

impl EventBusConfig {
    /// Create config for the Tokio bus with custom per-subscriber capacity
    pub fn tokio_with_capacity(capacity: usize) -> Self {
        Self {
            provider: EventBusProviderKind::Tokio,
            capacity,
        }
    }

    /// Create config for the null bus
    pub fn null() -> Self {
        Self {
            provider: EventBusProviderKind::Null,
            ..Default::default()
        }
    }
}
