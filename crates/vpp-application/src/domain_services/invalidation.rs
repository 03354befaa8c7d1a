//! Invalidation matching
//!
//! Decides whether a newly persisted record can change the aggregate cached
//! under a key. The predicate is re-derived from the key string alone.

use crate::cache_key::KeyPredicate;
use tracing::warn;
use vpp_domain::value_objects::IngestedRecord;

/// Whether `record` falls inside the range predicate encoded in `key`
///
/// Each capacity bound present in the key is checked on its own, even when
/// the repository query for that key ignored a lone bound. Keys that cannot
/// be parsed are reported as affected.
///
/// ```
/// use vpp_application::is_affected;
/// use vpp_domain::value_objects::IngestedRecord;
///
/// let key = "battery-stats::from=2000:to=3000:min=5000:max=7000";
/// assert!(is_affected(key, &IngestedRecord::new("2500", 6000.0)));
/// assert!(!is_affected(key, &IngestedRecord::new("2500", 8000.0)));
/// assert!(is_affected("invalid-key", &IngestedRecord::new("2500", 6000.0)));
/// ```
pub fn is_affected(key: &str, record: &IngestedRecord) -> bool {
    match KeyPredicate::parse(key) {
        Ok(predicate) => predicate.contains(record),
        Err(e) => {
            warn!("Unparseable cache key '{}', treating as affected: {}", key, e);
            true
        }
    }
}
