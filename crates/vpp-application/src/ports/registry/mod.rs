//! Provider registries
//!
//! Provider crates submit entries into `linkme` distributed slices; the
//! infrastructure layer resolves them by the name found in configuration.

pub mod cache;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
