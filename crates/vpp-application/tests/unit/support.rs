//! Test doubles for the application ports

use async_trait::async_trait;
use futures::stream;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::broadcast;
use vpp_domain::entities::Battery;
use vpp_domain::error::{Error, Result};
use vpp_domain::events::DomainEvent;
use vpp_domain::ports::providers::key_matches_pattern;
use vpp_domain::ports::{
    CacheEntryConfig, CacheProvider, CacheStats, DomainEventStream, EventBusProvider,
};
use vpp_domain::repositories::BatteryRepository;
use vpp_domain::value_objects::{BatteryFilter, PageRequest};

/// In-memory cache recording every call, with switchable failures
#[derive(Debug, Default)]
pub struct RecordingCache {
    entries: Mutex<BTreeMap<String, String>>,
    pub gets: AtomicUsize,
    pub sets: AtomicUsize,
    pub deletes: AtomicUsize,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
    pub fail_keys: AtomicBool,
    fail_delete_for: Mutex<HashSet<String>>,
    last_ttl_secs: Mutex<Option<u64>>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn fail_delete_for(&self, key: &str) {
        self.fail_delete_for
            .lock()
            .unwrap()
            .insert(key.to_string());
    }

    pub fn last_ttl_secs(&self) -> Option<u64> {
        *self.last_ttl_secs.lock().unwrap()
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheProvider for RecordingCache {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Error::cache("connection refused"));
        }
        Ok(self.value(key))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(Error::cache("connection refused"));
        }
        *self.last_ttl_secs.lock().unwrap() = Some(config.effective_ttl().as_secs());
        self.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete_for.lock().unwrap().contains(key) {
            return Err(Error::cache("delete failed"));
        }
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.contains(key))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        if self.fail_keys.load(Ordering::SeqCst) {
            return Err(Error::cache("scan failed"));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|key| key_matches_pattern(key, pattern))
            .cloned()
            .collect())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    async fn size(&self) -> Result<usize> {
        Ok(self.entries.lock().unwrap().len())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Vector-backed repository counting every call
#[derive(Debug, Default)]
pub struct StubRepository {
    batteries: Mutex<Vec<Battery>>,
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
    pub last_filter: Mutex<Option<BatteryFilter>>,
    pub last_page: Mutex<Option<PageRequest>>,
}

impl StubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batteries(batteries: Vec<Battery>) -> Self {
        let repository = Self::new();
        *repository.batteries.lock().unwrap() = batteries;
        repository
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Battery> {
        self.batteries.lock().unwrap().clone()
    }

    fn enter(&self, filter: &BatteryFilter) -> Result<Vec<Battery>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::database("connection reset"));
        }
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        Ok(self
            .batteries
            .lock()
            .unwrap()
            .iter()
            .filter(|b| filter.matches(&b.postcode, b.capacity))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BatteryRepository for StubRepository {
    async fn save(&self, battery: Battery) -> Result<Battery> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::database("connection reset"));
        }
        let saved = battery.with_id(uuid_for(self.batteries.lock().unwrap().len()));
        self.batteries.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn find_by_filter(
        &self,
        filter: &BatteryFilter,
        page: PageRequest,
    ) -> Result<Vec<Battery>> {
        let mut matching = self.enter(filter)?;
        *self.last_page.lock().unwrap() = Some(page);
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .collect())
    }

    async fn count(&self, filter: &BatteryFilter) -> Result<i64> {
        Ok(self.enter(filter)?.len() as i64)
    }

    async fn sum_capacity(&self, filter: &BatteryFilter) -> Result<Option<f64>> {
        let matching = self.enter(filter)?;
        Ok((!matching.is_empty())
            .then(|| matching.iter().map(|b| f64::from(b.capacity)).sum()))
    }

    async fn average_capacity(&self, filter: &BatteryFilter) -> Result<Option<f64>> {
        let matching = self.enter(filter)?;
        Ok((!matching.is_empty()).then(|| {
            matching.iter().map(|b| f64::from(b.capacity)).sum::<f64>() / matching.len() as f64
        }))
    }
}

fn uuid_for(index: usize) -> uuid::Uuid {
    uuid::Uuid::from_u128(index as u128 + 1)
}

/// Broadcast bus that also records every published event
pub struct RecordingEventBus {
    sender: broadcast::Sender<DomainEvent>,
    pub published: Mutex<Vec<DomainEvent>>,
    pub fail: AtomicBool,
}

impl RecordingEventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self {
            sender,
            published: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventBusProvider for RecordingEventBus {
    async fn publish_event(&self, event: DomainEvent) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::event_bus("broker unavailable"));
        }
        self.published.lock().unwrap().push(event.clone());
        let _ = self.sender.send(event);
        Ok(())
    }

    async fn subscribe_events(&self) -> Result<DomainEventStream> {
        let receiver = self.sender.subscribe();
        let events = stream::unfold(receiver, |mut rx| async move {
            rx.recv().await.ok().map(|event| (event, rx))
        });
        Ok(Box::pin(events))
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}
