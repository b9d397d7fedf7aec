//! Weather service trait definition.

use crate::dto::{FetchWeatherRequest, UpdateWeatherRequest, WeatherListResponse, WeatherResponse};
use async_trait::async_trait;
use weatherhub_core::{HubResult, WeatherId};

/// Weather service trait.
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Fetches current weather from the provider and stores a new record.
    async fn fetch_and_store(&self, request: FetchWeatherRequest) -> HubResult<WeatherResponse>;

    /// Lists all stored weather records.
    async fn list_records(&self) -> HubResult<WeatherListResponse>;

    /// Gets a weather record by ID.
    async fn get_record(&self, id: WeatherId) -> HubResult<WeatherResponse>;

    /// Gets the most recently fetched record for a city.
    async fn get_latest_by_city(&self, city_name: &str) -> HubResult<WeatherResponse>;

    /// Overwrites the measurements of an existing record.
    async fn update_record(
        &self,
        id: WeatherId,
        request: UpdateWeatherRequest,
    ) -> HubResult<WeatherResponse>;

    /// Deletes a weather record.
    async fn delete_record(&self, id: WeatherId) -> HubResult<()>;
}
