//! Redis-based cache store implementation.

use super::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config as RedisPoolConfig, Pool, Runtime};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use weatherhub_core::{HubError, HubResult};
use weatherhub_config::RedisConfig;

/// Redis-based cache store.
pub struct RedisCacheStore {
    /// Redis connection pool. `None` when caching is disabled.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheStore {
    /// Create a new Redis cache store.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a cache store from configuration.
    ///
    /// Returns a disabled store when Redis is disabled in configuration.
    pub fn from_config(config: &RedisConfig) -> HubResult<Self> {
        if !config.enabled {
            return Ok(Self::disabled());
        }

        let mut pool_config = RedisPoolConfig::from_url(&config.url);
        pool_config.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size as usize));
        let pool = pool_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| HubError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Create a no-op cache store (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> HubResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| HubError::Cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(HubError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> HubResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| HubError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> HubResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| HubError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> HubResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| HubError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cache() {
        let cache = RedisCacheStore::disabled();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_is_a_no_op() {
        let cache = RedisCacheStore::disabled();
        assert_eq!(cache.get_raw("weather:any").await.unwrap(), None);
        cache
            .set_raw("weather:any", "{}", Duration::from_secs(60))
            .await
            .unwrap();
        assert!(!cache.delete("weather:any").await.unwrap());
    }

    #[test]
    fn test_disabled_from_config() {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };
        let cache = RedisCacheStore::from_config(&config).unwrap();
        assert!(!cache.is_enabled());
    }
}
