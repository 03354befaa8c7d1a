//! Domain services
//!
//! Stateless building blocks of the cache-aside core: the invalidation
//! predicate and the aggregate computation.

pub mod aggregation;
pub mod invalidation;

pub use aggregation::{AggregationComputer, capacity_filter_policy, repository_filter};
pub use invalidation::is_affected;
