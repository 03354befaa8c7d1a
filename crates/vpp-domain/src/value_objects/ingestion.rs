//! Ingestion value objects

use crate::constants::POSTCODE_LENGTH;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A battery registration as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryRegistration {
    /// Battery name
    pub name: String,
    /// Four-digit postcode
    pub postcode: String,
    /// Capacity in watts, non-negative
    pub capacity: i32,
}

impl BatteryRegistration {
    /// Create a registration
    pub fn new(name: impl Into<String>, postcode: impl Into<String>, capacity: i32) -> Self {
        Self {
            name: name.into(),
            postcode: postcode.into(),
            capacity,
        }
    }

    /// Validate the registration payload
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("Battery name is required"));
        }
        if self.postcode.len() != POSTCODE_LENGTH
            || !self.postcode.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::invalid_argument(format!(
                "Postcode must be exactly {POSTCODE_LENGTH} digits: '{}'",
                self.postcode
            )));
        }
        if self.capacity < 0 {
            return Err(Error::invalid_argument(format!(
                "Capacity must be non negative: {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

/// A durably persisted record as seen by cache invalidation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestedRecord {
    /// Postcode of the persisted battery
    pub postcode: String,
    /// Capacity of the persisted battery
    pub capacity: f64,
}

impl IngestedRecord {
    /// Create an ingested record
    pub fn new(postcode: impl Into<String>, capacity: f64) -> Self {
        Self {
            postcode: postcode.into(),
            capacity,
        }
    }
}
