//! Cache store trait for abstracted caching operations.

use async_trait::async_trait;
use std::time::Duration;
use weatherhub_core::HubResult;

/// Cache store for string-keyed values.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
/// Serialization stays with the caller so a payload that fails to decode
/// can be handled as a miss instead of an error.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> HubResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> HubResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> HubResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}
