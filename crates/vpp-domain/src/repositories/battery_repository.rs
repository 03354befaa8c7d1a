//! Battery Repository Interface
//!
//! Durable storage of batteries with range-filtered listing and aggregate
//! queries. Every filter is a closed postcode interval, optionally narrowed
//! by a closed capacity interval (see [`BatteryFilter`]).

use crate::entities::Battery;
use crate::error::Result;
use crate::value_objects::{BatteryFilter, PageRequest};
use async_trait::async_trait;

/// Repository: battery persistence and range aggregates
///
/// Aggregate methods return `None` when the filtered set is empty, matching
/// SQL `SUM`/`AVG` over zero rows.
///
/// # Example
///
/// ```ignore
/// use vpp_domain::repositories::BatteryRepository;
/// use vpp_domain::value_objects::{BatteryFilter, PageRequest};
///
/// let filter = BatteryFilter::postcode_between("2000", "3000");
/// let page = repo.find_by_filter(&filter, PageRequest::new(0, 50)).await?;
/// let total = repo.sum_capacity(&filter).await?.unwrap_or(0.0);
/// ```
#[async_trait]
pub trait BatteryRepository: Send + Sync {
    /// Persist a battery, returning it with its assigned id
    async fn save(&self, battery: Battery) -> Result<Battery>;

    /// List one page of matching batteries sorted by name ascending
    async fn find_by_filter(&self, filter: &BatteryFilter, page: PageRequest)
    -> Result<Vec<Battery>>;

    /// Count matching batteries
    async fn count(&self, filter: &BatteryFilter) -> Result<i64>;

    /// Sum of capacities over matching batteries
    async fn sum_capacity(&self, filter: &BatteryFilter) -> Result<Option<f64>>;

    /// Average capacity over matching batteries
    async fn average_capacity(&self, filter: &BatteryFilter) -> Result<Option<f64>>;
}
