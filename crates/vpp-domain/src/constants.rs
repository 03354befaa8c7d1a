//! Domain layer constants
//!
//! Values that are part of the query and ingestion contract. Infrastructure
//! defaults (log levels, config file names) live in
//! `vpp_infrastructure::constants`.

// ============================================================================
// QUERY CONSTANTS
// ============================================================================

/// Page number used when the caller does not supply one
pub const DEFAULT_PAGE: u32 = 0;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

// ============================================================================
// AGGREGATE CACHE CONSTANTS
// ============================================================================

/// Namespace prefix shared by every aggregate cache key
pub const AGGREGATE_CACHE_NAMESPACE: &str = "battery-stats";

/// Lifetime of a cached aggregate (10 minutes)
pub const AGGREGATE_CACHE_TTL_SECS: u64 = 600;

// ============================================================================
// INGESTION CONSTANTS
// ============================================================================

/// Topic on which battery registrations are published
pub const BATTERY_TOPIC: &str = "battery-topic";

/// Number of digits in a valid postcode
pub const POSTCODE_LENGTH: usize = 4;
