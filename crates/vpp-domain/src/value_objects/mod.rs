//! Value objects
//!
//! Immutable values exchanged between the layers: range query
//! specifications, aggregate results, repository filters and ingestion
//! payloads.

pub mod ingestion;
pub mod query;

pub use ingestion::{BatteryRegistration, IngestedRecord};
pub use query::{AggregateResult, BatteryFilter, CapacityRange, PageRequest, RangeQuerySpec};
