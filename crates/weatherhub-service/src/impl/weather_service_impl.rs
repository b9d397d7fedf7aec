//! Weather service implementation.

use crate::dto::{FetchWeatherRequest, UpdateWeatherRequest, WeatherListResponse, WeatherResponse};
use crate::weather_service::WeatherService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use weatherhub_core::{HubError, HubResult, ValidateExt, Weather, WeatherId};
use weatherhub_provider::WeatherProvider;
use weatherhub_repository::WeatherRepository;

/// Weather service implementation.
pub struct WeatherServiceImpl {
    repository: Arc<dyn WeatherRepository>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherServiceImpl {
    /// Creates a new weather service.
    #[must_use]
    pub fn new(repository: Arc<dyn WeatherRepository>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            repository,
            provider,
        }
    }
}

#[async_trait]
impl WeatherService for WeatherServiceImpl {
    async fn fetch_and_store(&self, request: FetchWeatherRequest) -> HubResult<WeatherResponse> {
        debug!(
            "Fetching weather for {},{}",
            request.city_name, request.country
        );

        request.validate_request()?;

        let unit = request.unit.unwrap_or_default();

        // The provider query is lowercased; the stored record keeps the
        // casing the caller supplied.
        let observation = self
            .provider
            .fetch_current(
                &request.city_name.to_lowercase(),
                &request.country.to_lowercase(),
                unit,
            )
            .await?;

        let weather =
            Weather::from_observation(request.city_name, request.country, unit, observation);

        let saved = self.repository.save(&weather).await?;

        info!("Weather record created: {}", saved.id);
        Ok(WeatherResponse::from(saved))
    }

    async fn list_records(&self) -> HubResult<WeatherListResponse> {
        debug!("Listing weather records");

        let records = self.repository.find_all().await?;
        Ok(WeatherListResponse::from(records))
    }

    async fn get_record(&self, id: WeatherId) -> HubResult<WeatherResponse> {
        debug!("Getting weather record: {}", id);

        let weather = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| HubError::not_found("weather record", id))?;

        Ok(WeatherResponse::from(weather))
    }

    async fn get_latest_by_city(&self, city_name: &str) -> HubResult<WeatherResponse> {
        debug!("Getting latest weather record for city: {}", city_name);

        let weather = self
            .repository
            .find_latest_by_city(city_name)
            .await?
            .ok_or_else(|| HubError::not_found("weather record", city_name))?;

        Ok(WeatherResponse::from(weather))
    }

    async fn update_record(
        &self,
        id: WeatherId,
        request: UpdateWeatherRequest,
    ) -> HubResult<WeatherResponse> {
        debug!("Updating weather record: {}", id);

        request.validate_request()?;

        let mut weather = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| HubError::not_found("weather record", id))?;

        weather.apply_measurements(
            request.temperature,
            request.description,
            request.humidity,
            request.wind_speed,
        );

        let updated = self.repository.update(&weather).await?;

        info!("Weather record updated: {}", id);
        Ok(WeatherResponse::from(updated))
    }

    async fn delete_record(&self, id: WeatherId) -> HubResult<()> {
        debug!("Deleting weather record: {}", id);

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(HubError::not_found("weather record", id));
        }

        info!("Weather record deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for WeatherServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use weatherhub_core::{Unit, WeatherObservation};

    #[derive(Default)]
    struct MemoryWeatherRepository {
        records: Mutex<HashMap<WeatherId, Weather>>,
    }

    #[async_trait]
    impl WeatherRepository for MemoryWeatherRepository {
        async fn save(&self, weather: &Weather) -> HubResult<Weather> {
            self.records
                .lock()
                .unwrap()
                .insert(weather.id, weather.clone());
            Ok(weather.clone())
        }

        async fn find_all(&self) -> HubResult<Vec<Weather>> {
            Ok(self.records.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: WeatherId) -> HubResult<Option<Weather>> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn find_latest_by_city(&self, city_name: &str) -> HubResult<Option<Weather>> {
            let records = self.records.lock().unwrap();
            Ok(records
                .values()
                .filter(|w| w.city_name.eq_ignore_ascii_case(city_name))
                .max_by_key(|w| w.fetched_at)
                .cloned())
        }

        async fn update(&self, weather: &Weather) -> HubResult<Weather> {
            let mut records = self.records.lock().unwrap();
            match records.get_mut(&weather.id) {
                Some(existing) => {
                    *existing = weather.clone();
                    Ok(weather.clone())
                }
                None => Err(HubError::not_found("weather record", weather.id)),
            }
        }

        async fn delete(&self, id: WeatherId) -> HubResult<bool> {
            Ok(self.records.lock().unwrap().remove(&id).is_some())
        }
    }

    /// Provider that records the query it received.
    #[derive(Default)]
    struct RecordingProvider {
        queries: Mutex<Vec<(String, String, Unit)>>,
        fail: bool,
    }

    #[async_trait]
    impl WeatherProvider for RecordingProvider {
        async fn fetch_current(
            &self,
            city: &str,
            country: &str,
            unit: Unit,
        ) -> HubResult<WeatherObservation> {
            self.queries
                .lock()
                .unwrap()
                .push((city.to_string(), country.to_string(), unit));

            if self.fail {
                return Err(HubError::external_service(
                    "openweathermap",
                    "upstream unavailable",
                ));
            }

            Ok(WeatherObservation {
                temperature: 21.5,
                humidity: 60,
                wind_speed: 3.2,
                description: "scattered clouds".to_string(),
                city_name: city.to_string(),
                country_code: country.to_uppercase(),
            })
        }
    }

    fn service(
        provider: Arc<RecordingProvider>,
    ) -> (WeatherServiceImpl, Arc<MemoryWeatherRepository>) {
        let repository = Arc::new(MemoryWeatherRepository::default());
        let service = WeatherServiceImpl::new(
            Arc::clone(&repository) as Arc<dyn WeatherRepository>,
            provider as Arc<dyn WeatherProvider>,
        );
        (service, repository)
    }

    fn fetch_request(city: &str) -> FetchWeatherRequest {
        FetchWeatherRequest {
            city_name: city.to_string(),
            country: "DE".to_string(),
            unit: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_and_store_lowercases_provider_query_only() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(Arc::clone(&provider));

        let response = service.fetch_and_store(fetch_request("Berlin")).await.unwrap();

        // Stored record keeps the caller's casing
        assert_eq!(response.city_name, "Berlin");
        assert_eq!(response.country, "DE");
        assert_eq!(response.unit, Unit::Metric);

        // Provider saw the lowercased query
        let queries = provider.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0],
            ("berlin".to_string(), "de".to_string(), Unit::Metric)
        );
    }

    #[tokio::test]
    async fn test_fetch_and_store_rejects_invalid_request() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(Arc::clone(&provider));

        let mut request = fetch_request("Berlin");
        request.country = "DEU".to_string();

        let err = service.fetch_and_store(request).await.unwrap_err();
        assert!(matches!(err, HubError::Validation(_)));
        assert!(provider.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_and_store_propagates_provider_failure() {
        let provider = Arc::new(RecordingProvider {
            fail: true,
            ..RecordingProvider::default()
        });
        let (service, repository) = service(Arc::clone(&provider));

        let err = service.fetch_and_store(fetch_request("Berlin")).await.unwrap_err();
        assert!(matches!(err, HubError::ExternalService { .. }));
        assert!(repository.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_record_maps_absence_to_not_found() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(provider);

        let err = service.get_record(WeatherId::new()).await.unwrap_err();
        assert!(matches!(err, HubError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_record_overwrites_measurements_only() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(provider);

        let created = service.fetch_and_store(fetch_request("Berlin")).await.unwrap();

        let updated = service
            .update_record(
                created.id,
                UpdateWeatherRequest {
                    temperature: 30.0,
                    description: "clear sky".to_string(),
                    humidity: 40,
                    wind_speed: 1.1,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.temperature, 30.0);
        assert_eq!(updated.description, "clear sky");
        assert_eq!(updated.city_name, "Berlin");
        assert_eq!(updated.fetched_at, created.fetched_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(provider);

        let err = service
            .update_record(
                WeatherId::new(),
                UpdateWeatherRequest {
                    temperature: 30.0,
                    description: "clear sky".to_string(),
                    humidity: 40,
                    wind_speed: 1.1,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, HubError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_not_found() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(provider);

        let err = service.delete_record(WeatherId::new()).await.unwrap_err();
        assert!(matches!(err, HubError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_existing_record() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, repository) = service(provider);

        let created = service.fetch_and_store(fetch_request("Berlin")).await.unwrap();
        service.delete_record(created.id).await.unwrap();
        assert!(repository.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_latest_by_city_is_case_insensitive() {
        let provider = Arc::new(RecordingProvider::default());
        let (service, _) = service(provider);

        service.fetch_and_store(fetch_request("Berlin")).await.unwrap();

        let latest = service.get_latest_by_city("BERLIN").await.unwrap();
        assert_eq!(latest.city_name, "Berlin");
    }
}
