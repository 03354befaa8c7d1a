//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `vpp_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vpp.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VPP";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "VPP_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "vpp";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Default cache provider name
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Name of the cache provider used when caching is disabled
pub const DISABLED_CACHE_PROVIDER: &str = "null";

/// Default cache entry bound for in-memory providers
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default event bus channel capacity
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;
