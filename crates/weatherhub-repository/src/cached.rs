//! Caching decorator over a weather repository.
//!
//! Wraps any [`WeatherRepository`] with a read-through / write-through cache.
//! The cache is strictly an accelerator: every cache failure is swallowed
//! after logging and the call falls back to the underlying store, so a
//! broken or disabled cache never changes observable behavior.

use crate::cache::{keys, CacheStore};
use crate::traits::WeatherRepository;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use weatherhub_core::{HubResult, Weather, WeatherId};

/// Counters for cache effectiveness, shared across clones.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    swallowed_errors: AtomicU64,
}

impl CacheStats {
    /// Number of lookups served from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that fell through to the store.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of cache failures absorbed without surfacing to callers.
    #[must_use]
    pub fn swallowed_errors(&self) -> u64 {
        self.swallowed_errors.load(Ordering::Relaxed)
    }
}

/// Read-through / write-through caching repository.
///
/// Lookups by ID consult the cache first; creates and updates populate it;
/// deletes evict it. Listing and latest-by-city queries pass straight
/// through, as their result sets go stale on every write.
pub struct CachedWeatherRepository {
    store: Arc<dyn WeatherRepository>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
    stats: Arc<CacheStats>,
}

impl CachedWeatherRepository {
    /// Creates a caching decorator around `store`.
    #[must_use]
    pub fn new(store: Arc<dyn WeatherRepository>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache,
            ttl,
            stats: Arc::new(CacheStats::default()),
        }
    }

    /// Returns the shared cache statistics handle.
    #[must_use]
    pub fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    /// Attempts a cache read. Errors and undecodable payloads are misses.
    async fn read_cache(&self, id: WeatherId) -> Option<Weather> {
        let key = keys::weather_by_id(id);
        match self.cache.get_raw(&key).await {
            Ok(Some(json)) => match serde_json::from_str::<Weather>(&json) {
                Ok(weather) => {
                    self.stats.hits.fetch_add(1, Ordering::Relaxed);
                    Some(weather)
                }
                Err(e) => {
                    warn!("Undecodable cache payload for '{}', treating as miss: {}", key, e);
                    self.stats.misses.fetch_add(1, Ordering::Relaxed);
                    None
                }
            },
            Ok(None) => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Err(e) => {
                warn!("Cache read failed for '{}': {}", key, e);
                self.stats.swallowed_errors.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Writes a record into the cache. Failures are logged and dropped.
    async fn write_cache(&self, weather: &Weather) {
        let key = keys::weather_by_id(weather.id);
        let json = match serde_json::to_string(weather) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode weather record for '{}': {}", key, e);
                self.stats.swallowed_errors.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        if let Err(e) = self.cache.set_raw(&key, &json, self.ttl).await {
            warn!("Cache write failed for '{}': {}", key, e);
            self.stats.swallowed_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Evicts a record from the cache. Failures are logged and dropped.
    async fn evict(&self, id: WeatherId) {
        let key = keys::weather_by_id(id);
        if let Err(e) = self.cache.delete(&key).await {
            warn!("Cache eviction failed for '{}': {}", key, e);
            self.stats.swallowed_errors.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[async_trait]
impl WeatherRepository for CachedWeatherRepository {
    async fn save(&self, weather: &Weather) -> HubResult<Weather> {
        let saved = self.store.save(weather).await?;
        self.write_cache(&saved).await;
        Ok(saved)
    }

    async fn find_all(&self) -> HubResult<Vec<Weather>> {
        self.store.find_all().await
    }

    async fn find_by_id(&self, id: WeatherId) -> HubResult<Option<Weather>> {
        if let Some(weather) = self.read_cache(id).await {
            debug!("Serving weather record {} from cache", id);
            return Ok(Some(weather));
        }

        let found = self.store.find_by_id(id).await?;
        if let Some(weather) = &found {
            self.write_cache(weather).await;
        }
        Ok(found)
    }

    async fn find_latest_by_city(&self, city_name: &str) -> HubResult<Option<Weather>> {
        self.store.find_latest_by_city(city_name).await
    }

    async fn update(&self, weather: &Weather) -> HubResult<Weather> {
        let updated = self.store.update(weather).await?;
        self.write_cache(&updated).await;
        Ok(updated)
    }

    async fn delete(&self, id: WeatherId) -> HubResult<bool> {
        let deleted = self.store.delete(id).await?;
        self.evict(id).await;
        Ok(deleted)
    }
}

impl std::fmt::Debug for CachedWeatherRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedWeatherRepository")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
