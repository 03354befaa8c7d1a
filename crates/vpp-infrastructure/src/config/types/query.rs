//! Query configuration types

use serde::{Deserialize, Serialize};
use vpp_domain::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Defaults applied to range queries that omit pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page used when a query omits it
    pub default_page: u32,

    /// Page size used when a query omits it
    pub default_page_size: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
