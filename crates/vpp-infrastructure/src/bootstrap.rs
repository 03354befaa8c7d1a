//! Application bootstrap
//!
//! Wires providers and services from an [`AppConfig`]. Cache providers are
//! resolved by name through the link-time registry; the event bus and the
//! repository are constructed directly.

use crate::config::{AppConfig, CacheConfig, EventBusConfig, EventBusProviderKind};
use crate::constants::DISABLED_CACHE_PROVIDER;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;
use vpp_application::ports::registry::{CacheProviderConfig, resolve_cache_provider};
use vpp_application::{
    AggregationComputer, BatteryConsumerService, BatteryQueryService, BatteryRegistrationService,
    IngestInvalidator,
};
use vpp_domain::error::{Error, Result};
use vpp_domain::ports::{CacheEntryConfig, CacheProvider, EventBusProvider};
use vpp_domain::repositories::BatteryRepository;
use vpp_providers::{InMemoryBatteryRepository, NullEventBusProvider, TokioEventBusProvider};

/// Fully wired application services
#[derive(Clone)]
pub struct AppContext {
    /// Aggregate cache
    pub cache: Arc<dyn CacheProvider>,
    /// Event bus between registration and persistence
    pub event_bus: Arc<dyn EventBusProvider>,
    /// Battery repository
    pub repository: Arc<dyn BatteryRepository>,
    /// Cache-aside query service
    pub query_service: BatteryQueryService,
    /// Selective cache invalidation
    pub invalidator: Arc<IngestInvalidator>,
    /// Producer side of ingestion
    pub registration_service: BatteryRegistrationService,
    /// Consumer side of ingestion
    pub consumer_service: Arc<BatteryConsumerService>,
}

impl AppContext {
    /// Build every provider and service described by `config`
    pub fn build(config: &AppConfig) -> Result<Self> {
        let cache = build_cache(&config.cache)?;
        let event_bus = build_event_bus(&config.event_bus)?;
        let repository: Arc<dyn BatteryRepository> = Arc::new(InMemoryBatteryRepository::new());

        let query_service = BatteryQueryService::new(
            Arc::clone(&cache),
            AggregationComputer::new(Arc::clone(&repository)),
        )
        .with_entry_config(CacheEntryConfig::new().with_ttl_secs(config.cache.ttl_secs))
        .with_page_defaults(config.query.default_page, config.query.default_page_size);
        let invalidator = Arc::new(IngestInvalidator::new(Arc::clone(&cache)));
        let registration_service = BatteryRegistrationService::new(Arc::clone(&event_bus));
        let consumer_service = Arc::new(BatteryConsumerService::new(
            Arc::clone(&repository),
            Arc::clone(&invalidator),
        ));

        info!(
            "Application context ready: cache={}, event_bus={}",
            cache.provider_name(),
            event_bus.provider_name()
        );

        Ok(Self {
            cache,
            event_bus,
            repository,
            query_service,
            invalidator,
            registration_service,
            consumer_service,
        })
    }

    /// Subscribe the consumer to the event bus and run it in the background
    pub async fn start_consumer(&self) -> Result<JoinHandle<usize>> {
        Arc::clone(&self.consumer_service)
            .spawn(self.event_bus.as_ref())
            .await
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache", &self.cache.provider_name())
            .field("event_bus", &self.event_bus.provider_name())
            .finish_non_exhaustive()
    }
}

fn build_cache(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    let provider_config = if config.enabled {
        let mut provider_config = CacheProviderConfig::new(&config.provider)
            .with_max_entries(config.max_entries)
            .with_ttl_secs(config.ttl_secs);
        if let Some(url) = &config.redis_url {
            provider_config = provider_config.with_uri(url);
        }
        provider_config
    } else {
        CacheProviderConfig::new(DISABLED_CACHE_PROVIDER)
    };

    resolve_cache_provider(&provider_config).map_err(Error::config)
}

fn build_event_bus(config: &EventBusConfig) -> Result<Arc<dyn EventBusProvider>> {
    match config.provider {
        EventBusProviderKind::Tokio => {
            if config.capacity == 0 {
                return Err(Error::config("Event bus capacity cannot be 0"));
            }
            Ok(Arc::new(TokioEventBusProvider::with_capacity(
                config.capacity,
            )))
        }
        EventBusProviderKind::Null => Ok(Arc::new(NullEventBusProvider::new())),
    }
}
