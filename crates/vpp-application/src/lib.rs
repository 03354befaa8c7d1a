//! Application Layer - VPP battery service
//!
//! Implements cached range aggregation over registered batteries and the
//! selective invalidation that keeps those caches honest when new
//! batteries are persisted.
//!
//! ## Read path
//!
//! ```text
//! RangeQuerySpec ─► cache_key::encode_key ─► CacheProvider::get_json
//!                                              │ hit ─► AggregateResult
//!                                              │ miss/error
//!                                              ▼
//!                          AggregationComputer::compute ─► set_json (best effort)
//! ```
//!
//! ## Write path
//!
//! ```text
//! BatteryRegistered ─► BatteryRepository::save ─► IngestInvalidator (detached)
//!                                                   keys("battery-stats::*")
//!                                                   is_affected? ─► delete
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on `vpp-domain` and pure Rust libraries.
//! Concrete caches, buses and repositories are injected as port trait
//! objects.

pub mod cache_key;
pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use cache_key::{KeyDecodeError, KeyPredicate, decode_key, encode_key};
pub use domain_services::*;
pub use use_cases::*;
