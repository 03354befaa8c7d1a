//! Provider ports

pub mod cache;

pub use cache::{CacheEntryConfig, CacheProvider, CacheStats, key_matches_pattern};
