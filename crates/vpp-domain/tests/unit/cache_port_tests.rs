use std::time::Duration;
use vpp_domain::ports::providers::key_matches_pattern;
use vpp_domain::ports::{CacheEntryConfig, CacheStats};

#[test]
fn test_entry_config_defaults_to_aggregate_ttl() {
    assert_eq!(
        CacheEntryConfig::default().effective_ttl(),
        Duration::from_secs(600)
    );
    assert_eq!(
        CacheEntryConfig { ttl: None }.effective_ttl(),
        Duration::from_secs(600)
    );
    assert_eq!(
        CacheEntryConfig::new().with_ttl_secs(30).effective_ttl(),
        Duration::from_secs(30)
    );
}

#[test]
fn test_hit_rate() {
    let stats = CacheStats {
        hits: 3,
        misses: 1,
        ..CacheStats::new()
    };

    assert!((stats.calculate_hit_rate() - 0.75).abs() < f64::EPSILON);
    assert!(CacheStats::new().calculate_hit_rate().abs() < f64::EPSILON);
}

#[test]
fn test_key_pattern_matching() {
    assert!(key_matches_pattern("battery-stats::from=1", "battery-stats::*"));
    assert!(key_matches_pattern("anything", "*"));
    assert!(!key_matches_pattern("battery-stats:from=1", "battery-stats::*"));
    assert!(key_matches_pattern("exact", "exact"));
    assert!(!key_matches_pattern("exact-ish", "exact"));
}
