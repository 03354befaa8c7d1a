//! Cache Provider Port
//!
//! Port for cache backend providers. Supports in-memory (Moka),
//! distributed (Redis) and null providers.
//!
//! Values are stored as JSON strings. Besides get/set/delete the port
//! exposes key enumeration by pattern, which selective invalidation uses to
//! find every live aggregate key.

use crate::constants::AGGREGATE_CACHE_TTL_SECS;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// # Example
///
/// ```
/// use vpp_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default().with_ttl(Duration::from_secs(60));
/// assert_eq!(config.effective_ttl(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with the aggregate TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(AGGREGATE_CACHE_TTL_SECS)),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Get the effective TTL, falling back to the aggregate default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(AGGREGATE_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Operation Statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Provider Port
///
/// # Implementations
///
/// - **Moka**: In-memory cache with configurable TTL
/// - **Redis**: Distributed cache for multi-instance deployments
/// - **Null**: No-op provider that never stores anything
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as JSON string
    ///
    /// Returns `None` if the key is absent or expired.
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Set a value in the cache from JSON string
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// Returns true if the key was deleted, false if it didn't exist.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Enumerate live keys matching `pattern`
    ///
    /// Patterns follow the Redis glob subset used by this service: a
    /// trailing `*` matches any suffix, anything else must match exactly.
    /// The whole key space is walked in one pass.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Clear all values from the cache
    async fn clear(&self) -> Result<()>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Match a key against a [`CacheProvider::keys`] pattern
///
/// ```
/// use vpp_domain::ports::providers::key_matches_pattern;
///
/// assert!(key_matches_pattern("battery-stats::from=1", "battery-stats::*"));
/// assert!(!key_matches_pattern("other::from=1", "battery-stats::*"));
/// assert!(key_matches_pattern("exact", "exact"));
/// ```
pub fn key_matches_pattern(key: &str, pattern: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}
