//! Ingest Invalidator Use Case
//!
//! After a battery is persisted, walks every aggregate cache key and
//! deletes the ones whose range predicate contains the new record.
//!
//! The sweep is best effort. Enumeration or deletion failures are logged
//! and the sweep moves on; a surviving stale key is caught by the next
//! matching write or expires with its TTL. Sweeps race freely with
//! concurrent reads and repopulation of the same keys.

use crate::cache_key::key_pattern;
use crate::domain_services::is_affected;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};
use vpp_domain::ports::CacheProvider;
use vpp_domain::value_objects::IngestedRecord;

/// Outcome of one invalidation sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidationReport {
    /// Keys enumerated under the aggregate namespace
    pub scanned: usize,
    /// Keys deleted
    pub deleted: usize,
    /// Keys whose deletion failed
    pub failed: usize,
}

/// Selective aggregate cache invalidation
#[derive(Debug, Clone)]
pub struct IngestInvalidator {
    cache: Arc<dyn CacheProvider>,
}

impl IngestInvalidator {
    /// Create an invalidator over the given cache
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    /// Delete every aggregate key affected by `record`
    pub async fn invalidate(&self, record: &IngestedRecord) -> InvalidationReport {
        let mut report = InvalidationReport::default();

        let keys = match self.cache.keys(&key_pattern()).await {
            Ok(keys) => keys,
            Err(e) => {
                error!("Error invalidating cache: {}", e);
                return report;
            }
        };
        report.scanned = keys.len();

        for key in keys.iter().filter(|key| is_affected(key, record)) {
            debug!("Invalidating cache key: {}", key);
            match self.cache.delete(key).await {
                Ok(true) => report.deleted += 1,
                // Expired or deleted by a concurrent sweep
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to delete cache key {}: {}", key, e);
                    report.failed += 1;
                }
            }
        }

        debug!(
            "Invalidation for postcode {} capacity {}: scanned={}, deleted={}, failed={}",
            record.postcode, record.capacity, report.scanned, report.deleted, report.failed
        );
        report
    }

    /// Run [`Self::invalidate`] on a detached task
    pub fn spawn(self: &Arc<Self>, record: IngestedRecord) -> JoinHandle<InvalidationReport> {
        let invalidator = Arc::clone(self);
        tokio::spawn(async move { invalidator.invalidate(&record).await })
    }
}
