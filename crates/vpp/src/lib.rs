//! # VPP Battery Service
//!
//! Range aggregates over registered batteries, served cache-aside and
//! kept fresh by selective invalidation on ingest.
//!
//! - `domain` - entities, value objects, ports and errors
//! - `application` - cache key codec, aggregation, query and ingestion use cases
//! - `infrastructure` - configuration, logging and bootstrap
//! - [`cli`] - the `vpp` command line

pub mod cli;

/// Domain layer - core types and ports
pub mod domain {
    pub use vpp_domain::*;
}

/// Application layer - use cases and the cache key codec
pub mod application {
    pub use vpp_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use vpp_infrastructure::*;
}
