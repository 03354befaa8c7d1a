//! Cache configuration types

use crate::constants::{CACHE_DEFAULT_MAX_ENTRIES, DEFAULT_CACHE_PROVIDER};
use serde::{Deserialize, Serialize};
use vpp_domain::constants::AGGREGATE_CACHE_TTL_SECS;

/// Aggregate cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled; when false the `null` provider is used
    pub enabled: bool,

    /// Registered cache provider name (`moka`, `redis`, `null`)
    pub provider: String,

    /// TTL of aggregate entries in seconds
    pub ttl_secs: u64,

    /// Maximum number of entries (in-memory providers)
    pub max_entries: u64,

    /// Redis URL (for Redis provider)
    pub redis_url: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            ttl_secs: AGGREGATE_CACHE_TTL_SECS,
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            redis_url: None,
        }
    }
}
