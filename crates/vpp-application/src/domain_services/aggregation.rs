//! Aggregate computation
//!
//! Computes the four facets of a range query (page of names, capacity sum,
//! capacity average, total count) through the battery repository.

use std::sync::Arc;
use tracing::debug;
use vpp_domain::error::Result;
use vpp_domain::repositories::BatteryRepository;
use vpp_domain::value_objects::{AggregateResult, BatteryFilter, CapacityRange, RangeQuerySpec};

/// Capacity interval the repository query is narrowed by
///
/// Only engaged when both bounds are present. A spec carrying a single
/// bound is queried by postcode alone, while invalidation still honours
/// that bound on its own (see [`crate::is_affected`]).
pub fn capacity_filter_policy(spec: &RangeQuerySpec) -> Option<CapacityRange> {
    match (spec.min_capacity(), spec.max_capacity()) {
        (Some(min), Some(max)) => Some(CapacityRange { min, max }),
        _ => None,
    }
}

/// Repository filter for a spec
pub fn repository_filter(spec: &RangeQuerySpec) -> BatteryFilter {
    BatteryFilter {
        postcode_from: spec.postcode_from().to_string(),
        postcode_to: spec.postcode_to().to_string(),
        capacity: capacity_filter_policy(spec),
    }
}

/// Computes aggregates directly from the repository
#[derive(Clone)]
pub struct AggregationComputer {
    repository: Arc<dyn BatteryRepository>,
}

impl AggregationComputer {
    /// Create a computer over the given repository
    pub fn new(repository: Arc<dyn BatteryRepository>) -> Self {
        Self { repository }
    }

    /// Compute the aggregate for `spec`
    ///
    /// The listing and the three aggregates are issued concurrently. Empty
    /// sums and averages become `0.0`. Pagination is passed through as-is.
    pub async fn compute(&self, spec: &RangeQuerySpec) -> Result<AggregateResult> {
        let filter = repository_filter(spec);
        match filter.capacity {
            Some(range) => debug!(
                "Using capacity range filter: min={}, max={}",
                range.min, range.max
            ),
            None => debug!("Using postcode range filter only"),
        }

        let (batteries, sum, average, count) = tokio::try_join!(
            self.repository.find_by_filter(&filter, spec.page_request()),
            self.repository.sum_capacity(&filter),
            self.repository.average_capacity(&filter),
            self.repository.count(&filter),
        )?;

        let result = AggregateResult {
            battery_names: batteries.into_iter().map(|battery| battery.name).collect(),
            total_watt_capacity: sum.unwrap_or(0.0),
            average_watt_capacity: average.unwrap_or(0.0),
            total_batteries: count,
            page: spec.page(),
            size: spec.page_size(),
        };

        debug!(
            "Query results: names.size={}, totalCapacity={}, avgCapacity={}, totalCount={}",
            result.battery_names.len(),
            result.total_watt_capacity,
            result.average_watt_capacity,
            result.total_batteries
        );
        Ok(result)
    }
}

impl std::fmt::Debug for AggregationComputer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationComputer").finish_non_exhaustive()
    }
}
