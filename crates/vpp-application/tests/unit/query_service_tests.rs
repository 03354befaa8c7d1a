//! Cache-aside query service tests

use crate::support::{RecordingCache, StubRepository};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use vpp_application::{AggregationComputer, BatteryQueryService, encode_key};
use vpp_domain::entities::Battery;
use vpp_domain::error::Error;
use vpp_domain::ports::CacheEntryConfig;
use vpp_domain::value_objects::{AggregateResult, RangeQuerySpec};

struct Fixture {
    cache: Arc<RecordingCache>,
    repository: Arc<StubRepository>,
    service: BatteryQueryService,
}

fn fixture() -> Fixture {
    let cache = Arc::new(RecordingCache::new());
    let repository = Arc::new(StubRepository::with_batteries(vec![
        Battery::new("B1", "2500", 6000),
        Battery::new("B2", "2600", 4000),
        Battery::new("B3", "3500", 9000),
    ]));
    let service =
        BatteryQueryService::new(cache.clone(), AggregationComputer::new(repository.clone()));
    Fixture {
        cache,
        repository,
        service,
    }
}

fn canned_result() -> AggregateResult {
    AggregateResult {
        battery_names: vec!["cached".to_string()],
        total_watt_capacity: 1.0,
        average_watt_capacity: 1.0,
        total_batteries: 1,
        page: 0,
        size: 50,
    }
}

#[tokio::test]
async fn test_hit_skips_repository() {
    let f = fixture();
    let spec = RangeQuerySpec::new("2000", "3000");
    f.cache.insert(
        &encode_key(&spec),
        &serde_json::to_string(&canned_result()).unwrap(),
    );

    let result = f.service.get_or_compute(&spec).await.unwrap();

    assert_eq!(result, canned_result());
    assert_eq!(f.repository.calls(), 0);
    assert_eq!(RecordingCache::count(&f.cache.sets), 0);
}

#[tokio::test]
async fn test_miss_computes_and_populates() {
    let f = fixture();
    let spec = RangeQuerySpec::new("2000", "3000");

    let result = f.service.get_or_compute(&spec).await.unwrap();
    let direct = AggregationComputer::new(f.repository.clone())
        .compute(&spec)
        .await
        .unwrap();

    assert_eq!(result, direct);
    assert_eq!(result.battery_names, vec!["B1", "B2"]);
    let cached: AggregateResult =
        serde_json::from_str(&f.cache.value(&encode_key(&spec)).unwrap()).unwrap();
    assert_eq!(cached, result);
    assert_eq!(f.cache.last_ttl_secs(), Some(600));
}

#[tokio::test]
async fn test_second_query_is_served_from_cache() {
    let f = fixture();
    let spec = RangeQuerySpec::new("2000", "3000");

    let first = f.service.get_or_compute(&spec).await.unwrap();
    let calls_after_miss = f.repository.calls();
    let second = f.service.get_or_compute(&spec).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(f.repository.calls(), calls_after_miss);
}

#[tokio::test]
async fn test_read_error_degrades_to_compute_and_write() {
    let f = fixture();
    f.cache.fail_get.store(true, Ordering::SeqCst);
    let spec = RangeQuerySpec::new("2000", "3000");

    let result = f.service.get_or_compute(&spec).await.unwrap();

    assert_eq!(result.total_batteries, 2);
    assert!(f.repository.calls() > 0);
    assert_eq!(RecordingCache::count(&f.cache.sets), 1);
    assert!(f.cache.contains(&encode_key(&spec)));
}

#[tokio::test]
async fn test_write_error_still_returns_result() {
    let f = fixture();
    f.cache.fail_set.store(true, Ordering::SeqCst);
    let spec = RangeQuerySpec::new("2000", "3000");

    let result = f.service.get_or_compute(&spec).await.unwrap();

    assert_eq!(result.total_batteries, 2);
    assert_eq!(RecordingCache::count(&f.cache.sets), 1);
    assert!(!f.cache.contains(&encode_key(&spec)));
}

#[tokio::test]
async fn test_undecodable_entry_is_recomputed() {
    let f = fixture();
    let spec = RangeQuerySpec::new("2000", "3000");
    f.cache.insert(&encode_key(&spec), "{not json");

    let result = f.service.get_or_compute(&spec).await.unwrap();

    assert_eq!(result.total_batteries, 2);
    let cached: AggregateResult =
        serde_json::from_str(&f.cache.value(&encode_key(&spec)).unwrap()).unwrap();
    assert_eq!(cached, result);
}

#[tokio::test]
async fn test_repository_error_reaches_caller() {
    let f = fixture();
    f.repository.fail.store(true, Ordering::SeqCst);

    let err = f
        .service
        .get_or_compute(&RangeQuerySpec::new("2000", "3000"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Database { .. }));
    assert_eq!(RecordingCache::count(&f.cache.sets), 0);
}

#[tokio::test]
async fn test_get_batteries_applies_defaults() {
    let f = fixture();

    let result = f
        .service
        .get_batteries("2000", "3000", None, None, None, None)
        .await
        .unwrap();

    assert_eq!((result.page, result.size), (0, 50));
    assert!(
        f.cache
            .contains("battery-stats::from=2000:to=3000:min=null:max=null:page=0:size=50")
    );
}

#[tokio::test]
async fn test_get_batteries_uses_configured_page_defaults() {
    let f = fixture();
    let service = f.service.clone().with_page_defaults(2, 10);

    let result = service
        .get_batteries("2000", "3000", None, None, None, Some(5))
        .await
        .unwrap();

    assert_eq!((result.page, result.size), (2, 5));
    assert!(
        f.cache
            .contains("battery-stats::from=2000:to=3000:min=null:max=null:page=2:size=5")
    );
}

#[tokio::test]
async fn test_get_batteries_rejects_invalid_requests() {
    let f = fixture();

    let err = f
        .service
        .get_batteries("2000", "3000", None, None, Some(0), Some(0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let err = f
        .service
        .get_batteries("", "3000", None, None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(RecordingCache::count(&f.cache.gets), 0);
}

#[tokio::test]
async fn test_custom_ttl_is_used() {
    let f = fixture();
    let service = f
        .service
        .clone()
        .with_entry_config(CacheEntryConfig::default().with_ttl_secs(30));

    service
        .get_or_compute(&RangeQuerySpec::new("2000", "3000"))
        .await
        .unwrap();

    assert_eq!(f.cache.last_ttl_secs(), Some(30));
}
