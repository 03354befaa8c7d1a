//! In-memory battery repository
//!
//! Stores batteries in a concurrent hash map keyed by id. Data is not
//! persisted and is lost on restart. Listings and aggregates scan every
//! stored battery, so this backend suits development, tests and the CLI.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;
use vpp_domain::entities::Battery;
use vpp_domain::error::Result;
use vpp_domain::repositories::BatteryRepository;
use vpp_domain::value_objects::{BatteryFilter, PageRequest};

/// In-memory battery repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryBatteryRepository {
    batteries: Arc<DashMap<Uuid, Battery>>,
}

impl InMemoryBatteryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored batteries regardless of filter
    pub fn len(&self) -> usize {
        self.batteries.len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.batteries.is_empty()
    }

    fn matching_capacities(&self, filter: &BatteryFilter) -> Vec<i32> {
        self.batteries
            .iter()
            .filter(|entry| filter.matches(&entry.postcode, entry.capacity))
            .map(|entry| entry.capacity)
            .collect()
    }
}

#[async_trait]
impl BatteryRepository for InMemoryBatteryRepository {
    async fn save(&self, battery: Battery) -> Result<Battery> {
        let id = battery.id.unwrap_or_else(Uuid::new_v4);
        let saved = battery.with_id(id);
        self.batteries.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_filter(
        &self,
        filter: &BatteryFilter,
        page: PageRequest,
    ) -> Result<Vec<Battery>> {
        let mut matching: Vec<Battery> = self
            .batteries
            .iter()
            .filter(|entry| filter.matches(&entry.postcode, entry.capacity))
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        Ok(matching
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .collect())
    }

    async fn count(&self, filter: &BatteryFilter) -> Result<i64> {
        Ok(i64::try_from(self.matching_capacities(filter).len()).unwrap_or(i64::MAX))
    }

    async fn sum_capacity(&self, filter: &BatteryFilter) -> Result<Option<f64>> {
        let capacities = self.matching_capacities(filter);
        if capacities.is_empty() {
            return Ok(None);
        }
        Ok(Some(capacities.into_iter().map(f64::from).sum()))
    }

    #[allow(clippy::cast_precision_loss)]
    async fn average_capacity(&self, filter: &BatteryFilter) -> Result<Option<f64>> {
        let capacities = self.matching_capacities(filter);
        if capacities.is_empty() {
            return Ok(None);
        }
        let count = capacities.len() as f64;
        let sum: f64 = capacities.into_iter().map(f64::from).sum();
        Ok(Some(sum / count))
    }
}
