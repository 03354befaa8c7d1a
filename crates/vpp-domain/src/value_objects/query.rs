//! Range query value objects

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Specification of a postcode/capacity range query
///
/// The postcode interval is closed and compared lexicographically. Either
/// capacity bound may be absent independently of the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeQuerySpec {
    postcode_from: String,
    postcode_to: String,
    min_capacity: Option<i32>,
    max_capacity: Option<i32>,
    page: u32,
    page_size: u32,
}

impl RangeQuerySpec {
    /// Create a spec over `[postcode_from, postcode_to]` with no capacity
    /// bounds and the default page
    pub fn new(postcode_from: impl Into<String>, postcode_to: impl Into<String>) -> Self {
        Self {
            postcode_from: postcode_from.into(),
            postcode_to: postcode_to.into(),
            min_capacity: None,
            max_capacity: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the inclusive lower capacity bound
    pub fn with_min_capacity(mut self, min: Option<i32>) -> Self {
        self.min_capacity = min;
        self
    }

    /// Set the inclusive upper capacity bound
    pub fn with_max_capacity(mut self, max: Option<i32>) -> Self {
        self.max_capacity = max;
        self
    }

    /// Set the zero-based page number and page size
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Lower postcode bound (inclusive)
    pub fn postcode_from(&self) -> &str {
        &self.postcode_from
    }

    /// Upper postcode bound (inclusive)
    pub fn postcode_to(&self) -> &str {
        &self.postcode_to
    }

    /// Lower capacity bound (inclusive), if any
    pub fn min_capacity(&self) -> Option<i32> {
        self.min_capacity
    }

    /// Upper capacity bound (inclusive), if any
    pub fn max_capacity(&self) -> Option<i32> {
        self.max_capacity
    }

    /// Zero-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of names per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page request derived from this spec
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Check that the spec lies in the legal query domain
    pub fn validate(&self) -> Result<()> {
        if self.postcode_from.is_empty() || self.postcode_to.is_empty() {
            return Err(Error::invalid_argument(
                "postcode range bounds must not be empty",
            ));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_argument("page size must be greater than 0"));
        }
        Ok(())
    }
}

/// Aggregates computed for one range query page
///
/// Serialized with the field names used by the cached JSON payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Names of the batteries on the requested page, sorted ascending
    pub battery_names: Vec<String>,
    /// Sum of capacities over the whole filtered set
    pub total_watt_capacity: f64,
    /// Average capacity over the whole filtered set
    pub average_watt_capacity: f64,
    /// Number of batteries in the whole filtered set
    pub total_batteries: i64,
    /// Page number the names belong to
    pub page: u32,
    /// Page size the names were fetched with
    pub size: u32,
}

/// Inclusive capacity interval used by repository queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRange {
    /// Lower bound (inclusive)
    pub min: i32,
    /// Upper bound (inclusive)
    pub max: i32,
}

impl CapacityRange {
    /// Whether `capacity` lies in `[min, max]`
    pub fn contains(&self, capacity: i32) -> bool {
        capacity >= self.min && capacity <= self.max
    }
}

/// Repository filter: a postcode interval, optionally narrowed by capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryFilter {
    /// Lower postcode bound (inclusive)
    pub postcode_from: String,
    /// Upper postcode bound (inclusive)
    pub postcode_to: String,
    /// Capacity interval, `None` for a postcode-only query
    pub capacity: Option<CapacityRange>,
}

impl BatteryFilter {
    /// Postcode-only filter
    pub fn postcode_between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            postcode_from: from.into(),
            postcode_to: to.into(),
            capacity: None,
        }
    }

    /// Narrow the filter to a capacity interval
    pub fn with_capacity_between(mut self, min: i32, max: i32) -> Self {
        self.capacity = Some(CapacityRange { min, max });
        self
    }

    /// Whether a battery with this postcode and capacity passes the filter
    pub fn matches(&self, postcode: &str, capacity: i32) -> bool {
        let postcode_in_range =
            postcode >= self.postcode_from.as_str() && postcode <= self.postcode_to.as_str();
        postcode_in_range && self.capacity.is_none_or(|range| range.contains(capacity))
    }
}

/// Page of a name-sorted listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number
    pub page: u32,
    /// Page size
    pub size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Number of rows to skip before this page
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}
