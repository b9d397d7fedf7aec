//! Repository trait definitions.

use async_trait::async_trait;
use weatherhub_core::{HubResult, Weather, WeatherId};

/// Connectivity probe for a backing dependency.
///
/// Readiness endpoints use this to check whether the store behind the
/// repository is reachable without depending on a concrete pool type.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Returns `Ok(())` when the dependency answers.
    async fn ping(&self) -> HubResult<()>;
}

/// Repository interface for weather record persistence.
///
/// Absence is modeled in the return types: lookups yield `Ok(None)` and
/// deletes yield `Ok(false)` when no row matches. Callers decide whether
/// that is an error.
#[async_trait]
pub trait WeatherRepository: Send + Sync {
    /// Persists a new weather record and returns the stored row.
    async fn save(&self, weather: &Weather) -> HubResult<Weather>;

    /// Returns all weather records, newest fetch first.
    async fn find_all(&self) -> HubResult<Vec<Weather>>;

    /// Finds a weather record by ID.
    async fn find_by_id(&self, id: WeatherId) -> HubResult<Option<Weather>>;

    /// Finds the most recently fetched record for a city.
    ///
    /// City matching is case-insensitive.
    async fn find_latest_by_city(&self, city_name: &str) -> HubResult<Option<Weather>>;

    /// Updates an existing weather record and returns the stored row.
    async fn update(&self, weather: &Weather) -> HubResult<Weather>;

    /// Deletes a weather record by ID.
    ///
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: WeatherId) -> HubResult<bool>;
}
