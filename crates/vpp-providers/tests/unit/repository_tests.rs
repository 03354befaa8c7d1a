use vpp_domain::entities::Battery;
use vpp_domain::repositories::BatteryRepository;
use vpp_domain::value_objects::{BatteryFilter, PageRequest};
use vpp_providers::repository::InMemoryBatteryRepository;

async fn seeded() -> InMemoryBatteryRepository {
    let repo = InMemoryBatteryRepository::new();
    for (name, postcode, capacity) in [
        ("Midland", "6057", 50_500),
        ("Cannington", "6107", 13_500),
        ("Akunda Bay", "2084", 13_500),
        ("Lesmurdie", "6076", 13_500),
        ("Hay Street", "6000", 23_000),
    ] {
        repo.save(Battery::new(name, postcode, capacity))
            .await
            .unwrap();
    }
    repo
}

#[tokio::test]
async fn test_save_assigns_id() {
    let repo = InMemoryBatteryRepository::new();

    let saved = repo.save(Battery::new("Midland", "6057", 50_500)).await.unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.name, "Midland");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_save_keeps_existing_id() {
    let repo = InMemoryBatteryRepository::new();
    let first = repo.save(Battery::new("Midland", "6057", 1)).await.unwrap();

    let updated = Battery {
        capacity: 2,
        ..first.clone()
    };
    let saved = repo.save(updated).await.unwrap();

    assert_eq!(saved.id, first.id);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_find_by_filter_sorts_by_name_and_pages() {
    let repo = seeded().await;
    let filter = BatteryFilter::postcode_between("6000", "6999");

    let first = repo
        .find_by_filter(&filter, PageRequest::new(0, 2))
        .await
        .unwrap();
    let second = repo
        .find_by_filter(&filter, PageRequest::new(1, 2))
        .await
        .unwrap();
    let beyond = repo
        .find_by_filter(&filter, PageRequest::new(5, 2))
        .await
        .unwrap();

    let names = |page: &[Battery]| page.iter().map(|b| b.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&first), vec!["Cannington", "Hay Street"]);
    assert_eq!(names(&second), vec!["Lesmurdie", "Midland"]);
    assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_capacity_filter_is_inclusive() {
    let repo = seeded().await;
    let filter = BatteryFilter::postcode_between("0000", "9999").with_capacity_between(13_500, 23_000);

    assert_eq!(repo.count(&filter).await.unwrap(), 4);
    assert_eq!(repo.sum_capacity(&filter).await.unwrap(), Some(63_500.0));
    assert_eq!(repo.average_capacity(&filter).await.unwrap(), Some(15_875.0));
}

#[tokio::test]
async fn test_aggregates_over_empty_set_are_none() {
    let repo = seeded().await;
    let filter = BatteryFilter::postcode_between("7000", "7999");

    assert_eq!(repo.count(&filter).await.unwrap(), 0);
    assert_eq!(repo.sum_capacity(&filter).await.unwrap(), None);
    assert_eq!(repo.average_capacity(&filter).await.unwrap(), None);
}
