//! Configuration management for WeatherHub.
//!
//! Layered configuration: TOML files per environment with local overrides,
//! finished off by `WEATHERHUB_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::{
    AppConfig, AppMetadata, CacheConfig, DatabaseConfig, ObservabilityConfig, ProviderConfig,
    RedisConfig, ServerConfig, DEFAULT_CACHE_TTL_SECS,
};
pub use loader::ConfigLoader;
