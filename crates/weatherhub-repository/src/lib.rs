//! Repository layer for WeatherHub.
//!
//! Provides the [`WeatherRepository`] trait, its PostgreSQL implementation,
//! a Redis-backed [`cache::CacheStore`], and the [`CachedWeatherRepository`]
//! decorator that layers read-through / write-through caching over any
//! repository.

pub mod cache;
pub mod cached;
pub mod pool;
pub mod postgres;
pub mod traits;

pub use cache::{CacheStore, RedisCacheStore};
pub use cached::{CacheStats, CachedWeatherRepository};
pub use pool::{create_pool, DatabasePool};
pub use postgres::PgWeatherRepository;
pub use traits::{HealthProbe, WeatherRepository};
