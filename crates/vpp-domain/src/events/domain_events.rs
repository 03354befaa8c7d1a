//! Domain events carried by the event bus

use crate::value_objects::BatteryRegistration;
use serde::{Deserialize, Serialize};

/// Events exchanged between registration and persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum DomainEvent {
    /// A client registered a battery; persistence happens downstream
    BatteryRegistered {
        /// The validated registration payload
        battery: BatteryRegistration,
    },
}
