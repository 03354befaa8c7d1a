//! Provider defaults

/// Default maximum number of entries held by the in-memory cache
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default Redis connection URI
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

/// Number of keys requested per Redis `SCAN` round trip
pub const REDIS_SCAN_COUNT: usize = 100;

/// Default capacity of the in-process event channel
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;
