use std::time::Duration;

use vpp_domain::ports::{CacheEntryConfig, CacheProvider};
use vpp_providers::cache::MokaCacheProvider;

#[tokio::test]
async fn test_set_then_get() {
    let cache = MokaCacheProvider::new();

    cache
        .set_json("k", r#"{"a":1}"#, CacheEntryConfig::default())
        .await
        .unwrap();

    assert_eq!(
        cache.get_json("k").await.unwrap().as_deref(),
        Some(r#"{"a":1}"#)
    );
    assert!(cache.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_delete_reports_whether_key_existed() {
    let cache = MokaCacheProvider::new();
    cache
        .set_json("k", "1", CacheEntryConfig::default())
        .await
        .unwrap();

    assert!(cache.delete("k").await.unwrap());
    assert!(!cache.delete("k").await.unwrap());
    assert_eq!(cache.get_json("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_keys_filters_by_prefix_pattern() {
    let cache = MokaCacheProvider::new();
    for key in [
        "battery-stats::from=1000:to=2000",
        "battery-stats::from=3000:to=4000",
        "other::from=1000:to=2000",
    ] {
        cache
            .set_json(key, "{}", CacheEntryConfig::default())
            .await
            .unwrap();
    }

    let mut keys = cache.keys("battery-stats::*").await.unwrap();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "battery-stats::from=1000:to=2000".to_string(),
            "battery-stats::from=3000:to=4000".to_string(),
        ]
    );
    assert_eq!(
        cache.keys("other::from=1000:to=2000").await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_entry_expires_after_its_ttl() {
    let cache = MokaCacheProvider::new();
    cache
        .set_json(
            "short",
            "1",
            CacheEntryConfig::default().with_ttl(Duration::from_millis(50)),
        )
        .await
        .unwrap();
    cache
        .set_json("long", "2", CacheEntryConfig::default())
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(cache.get_json("short").await.unwrap(), None);
    assert_eq!(cache.get_json("long").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_stats_track_hits_and_misses() {
    let cache = MokaCacheProvider::new();
    cache
        .set_json("k", "1", CacheEntryConfig::default())
        .await
        .unwrap();

    cache.get_json("k").await.unwrap();
    cache.get_json("missing").await.unwrap();

    let stats = cache.stats().await.unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
    assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_clear_removes_everything() {
    let cache = MokaCacheProvider::with_capacity(10);
    for key in ["a", "b", "c"] {
        cache
            .set_json(key, "1", CacheEntryConfig::default())
            .await
            .unwrap();
    }

    cache.clear().await.unwrap();

    assert_eq!(cache.size().await.unwrap(), 0);
    assert!(cache.keys("*").await.unwrap().is_empty());
}
