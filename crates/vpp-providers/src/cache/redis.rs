//! Redis distributed cache provider
//!
//! Distributed cache implementation using Redis as the backend, for
//! deployments where several service instances share one aggregate cache.
//!
//! Entries are written with `SET EX` so Redis expires them on its own, and
//! [`CacheProvider::keys`] walks the key space with `SCAN MATCH` rather
//! than the blocking `KEYS` command.

use crate::constants::{REDIS_DEFAULT_URI, REDIS_SCAN_COUNT};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::sync::{Arc, RwLock};
use vpp_domain::error::{Error, Result};
use vpp_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};

/// Redis cache provider
///
/// Uses multiplexed connections for efficient connection reuse.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    stats: Arc<RwLock<CacheStats>>,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = RedisCacheProvider::new("redis://localhost:6379")?;
    /// ```
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::infrastructure("Failed to create Redis client", e))?;

        Ok(Self {
            client,
            stats: Arc::new(RwLock::new(CacheStats::new())),
        })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::cache_with_source("Failed to get Redis connection", e))
    }

    fn record(&self, hit: bool) {
        if let Ok(mut stats) = self.stats.write() {
            if hit {
                stats.hits += 1;
            } else {
                stats.misses += 1;
            }
            stats.hit_rate = stats.calculate_hit_rate();
        }
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| Error::cache_with_source(format!("Redis GET failed: {e}"), e))?;
        self.record(value.is_some());
        Ok(value)
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.get_connection().await?;

        let ttl_seconds = config.effective_ttl().as_secs();

        let result: redis::RedisResult<()> = if ttl_seconds > 0 {
            conn.set_ex(key, value, ttl_seconds).await
        } else {
            conn.set(key, value).await
        };

        result.map_err(|e| Error::cache_with_source(format!("Redis SET failed: {e}"), e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;

        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| Error::cache_with_source(format!("Redis DEL failed: {e}"), e))?;
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;

        let exists: i64 = conn
            .exists(key)
            .await
            .map_err(|e| Error::cache_with_source(format!("Redis EXISTS failed: {e}"), e))?;
        Ok(exists > 0)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.get_connection().await?;

        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(REDIS_SCAN_COUNT)
                .query_async(&mut conn)
                .await
                .map_err(|e| Error::cache_with_source(format!("Redis SCAN failed: {e}"), e))?;
            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.get_connection().await?;

        redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source(format!("Redis FLUSHDB failed: {e}"), e))
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.size().await.unwrap_or(0);

        let mut stats = self
            .stats
            .read()
            .map_err(|_| Error::cache("Failed to read cache stats"))?
            .clone();
        stats.entries = entries as u64;
        Ok(stats)
    }

    async fn size(&self) -> Result<usize> {
        let mut conn = self.get_connection().await?;

        redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source(format!("Redis DBSIZE failed: {e}"), e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider").finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use vpp_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let provider = RedisCacheProvider::new(uri)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis distributed cache",
    factory: redis_cache_factory,
};
