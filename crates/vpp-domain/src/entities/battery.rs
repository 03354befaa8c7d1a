//! Battery entity
//!
//! A battery registered with the virtual power plant. Batteries are
//! identified by a repository-assigned id once persisted.

use crate::value_objects::{BatteryRegistration, IngestedRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted (or about to be persisted) battery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Battery {
    /// Repository-assigned identifier, `None` until saved
    pub id: Option<Uuid>,
    /// Battery name, used as the listing sort key
    pub name: String,
    /// Four-digit postcode where the battery is installed
    pub postcode: String,
    /// Capacity in watts
    pub capacity: i32,
}

impl Battery {
    /// Create an unsaved battery
    pub fn new(name: impl Into<String>, postcode: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            postcode: postcode.into(),
            capacity,
        }
    }

    /// Return a copy of this battery carrying the given id
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// The ingestion view of this battery used for cache invalidation
    pub fn to_ingested_record(&self) -> IngestedRecord {
        IngestedRecord::new(self.postcode.clone(), f64::from(self.capacity))
    }
}

impl From<BatteryRegistration> for Battery {
    fn from(registration: BatteryRegistration) -> Self {
        Self::new(
            registration.name,
            registration.postcode,
            registration.capacity,
        )
    }
}
