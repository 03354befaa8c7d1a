//! Battery Query Service Use Case
//!
//! Cache-aside read path for range aggregates. The cache is consulted
//! first; on a miss the aggregate is computed from the repository and
//! written back with the aggregate TTL.
//!
//! Cache failures never reach the caller. A failed read is treated as a
//! miss and a failed write is logged, so the only error a query can return
//! is a repository error from the computation itself.
//!
//! Concurrent misses on the same key are not coalesced: each caller
//! computes and writes, and the last write wins.

use crate::cache_key::encode_key;
use crate::domain_services::AggregationComputer;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use vpp_domain::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use vpp_domain::error::Result;
use vpp_domain::ports::{CacheEntryConfig, CacheProvider};
use vpp_domain::value_objects::{AggregateResult, RangeQuerySpec};

/// Cache-aside query service over battery range aggregates
#[derive(Debug, Clone)]
pub struct BatteryQueryService {
    cache: Arc<dyn CacheProvider>,
    computer: AggregationComputer,
    entry_config: CacheEntryConfig,
    default_page: u32,
    default_page_size: u32,
}

impl BatteryQueryService {
    /// Create a query service with the default aggregate TTL
    pub fn new(cache: Arc<dyn CacheProvider>, computer: AggregationComputer) -> Self {
        Self {
            cache,
            computer,
            entry_config: CacheEntryConfig::default(),
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the cache entry configuration
    pub fn with_entry_config(mut self, entry_config: CacheEntryConfig) -> Self {
        self.entry_config = entry_config;
        self
    }

    /// Override the page and page size used when a caller omits them
    pub fn with_page_defaults(mut self, page: u32, page_size: u32) -> Self {
        self.default_page = page;
        self.default_page_size = page_size;
        self
    }

    /// Query batteries by postcode and optional capacity range
    ///
    /// `page` defaults to 0 and `size` to 50 unless overridden with
    /// [`Self::with_page_defaults`]. The assembled spec is
    /// validated before it reaches the cache.
    pub async fn get_batteries(
        &self,
        postcode_from: &str,
        postcode_to: &str,
        min_capacity: Option<i32>,
        max_capacity: Option<i32>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<AggregateResult> {
        let spec = RangeQuerySpec::new(postcode_from, postcode_to)
            .with_min_capacity(min_capacity)
            .with_max_capacity(max_capacity)
            .with_page(
                page.unwrap_or(self.default_page),
                size.unwrap_or(self.default_page_size),
            );
        spec.validate()?;

        info!(
            "Querying batteries: postcodeRange=[{} to {}], capacityRange=[{:?} to {:?}], page={}, size={}",
            spec.postcode_from(),
            spec.postcode_to(),
            spec.min_capacity(),
            spec.max_capacity(),
            spec.page(),
            spec.page_size()
        );

        self.get_or_compute(&spec).await
    }

    /// Return the cached aggregate for `spec`, computing and caching it on
    /// a miss
    pub async fn get_or_compute(&self, spec: &RangeQuerySpec) -> Result<AggregateResult> {
        let key = encode_key(spec);

        if let Some(cached) = self.read_cached(&key).await {
            debug!("Cache hit for key: {}", key);
            return Ok(cached);
        }

        debug!("Cache miss for key: {}", key);
        let result = self.computer.compute(spec).await?;
        self.write_cached(&key, &result).await;
        Ok(result)
    }

    /// Read and deserialize a cached aggregate; any failure is a miss
    async fn read_cached(&self, key: &str) -> Option<AggregateResult> {
        let json = match self.cache.get_json(key).await {
            Ok(json) => json?,
            Err(e) => {
                error!("Error retrieving from cache: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Write an aggregate to the cache, logging failures
    async fn write_cached(&self, key: &str, result: &AggregateResult) {
        let json = match serde_json::to_string(result) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize aggregate for cache: {}", e);
                return;
            }
        };

        debug!(
            "Caching results with key: {}, expires in {}s",
            key,
            self.entry_config.effective_ttl().as_secs()
        );
        match self
            .cache
            .set_json(key, &json, self.entry_config.clone())
            .await
        {
            Ok(()) => debug!("Successfully cached results"),
            Err(e) => error!("Failed to cache results: {}", e),
        }
    }
}
