//! Application state for Axum handlers.

use std::sync::Arc;
use weatherhub_repository::{CacheStore, HealthProbe};
use weatherhub_service::WeatherService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<dyn WeatherService>,
    /// Probe for the persistent store, consulted by the readiness endpoint.
    pub database: Arc<dyn HealthProbe>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        weather_service: Arc<dyn WeatherService>,
        database: Arc<dyn HealthProbe>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            weather_service,
            database,
            cache,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
