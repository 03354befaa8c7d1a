//! # Provider Implementations
//!
//! Adapters implementing the ports defined in `vpp-domain`.
//!
//! | Category | Providers |
//! |----------|-----------|
//! | [`cache`] | Moka, Redis, Null |
//! | [`events`] | Tokio channels, Null |
//! | [`repository`] | In-memory battery repository |
//!
//! Cache providers register themselves in the
//! `vpp_application::ports::registry::CACHE_PROVIDERS` slice, so linking
//! this crate is enough to make them resolvable by name.

pub mod cache;
pub mod constants;
pub mod events;
pub mod repository;

pub use cache::NullCacheProvider;
#[cfg(feature = "cache-moka")]
pub use cache::MokaCacheProvider;
#[cfg(feature = "cache-redis")]
pub use cache::RedisCacheProvider;
pub use events::{NullEventBusProvider, TokioEventBusProvider};
pub use repository::InMemoryBatteryRepository;
