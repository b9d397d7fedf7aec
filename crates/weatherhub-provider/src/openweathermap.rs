//! OpenWeatherMap provider client.
//!
//! Talks to the current-weather endpoint and validates the response schema
//! before handing it to the service layer. Any upstream failure, including
//! an undecodable or schema-invalid body, surfaces as an external-service
//! error so the API maps it to 503.

use crate::traits::WeatherProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use validator::Validate;
use weatherhub_config::ProviderConfig;
use weatherhub_core::{HubError, HubResult, Unit, ValidateExt, WeatherObservation};

const PROVIDER_NAME: &str = "openweathermap";

/// OpenWeatherMap HTTP client.
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherMapClient {
    /// Creates a new client from provider configuration.
    pub fn new(config: &ProviderConfig) -> HubResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| HubError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client with an explicit timeout, key and base URL.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> HubResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HubError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

/// Response shape of the current-weather endpoint.
///
/// Only the fields the service consumes are validated; the rest of the
/// payload is ignored.
#[derive(Debug, Deserialize, Validate)]
struct OwmResponse {
    #[validate(length(min = 1), nested)]
    weather: Vec<OwmCondition>,
    #[validate(nested)]
    main: OwmMain,
    #[validate(nested)]
    wind: OwmWind,
    #[validate(nested)]
    sys: OwmSys,
    #[validate(length(min = 1))]
    name: String,
}

#[derive(Debug, Deserialize, serde::Serialize, Validate)]
struct OwmCondition {
    #[validate(length(min = 1))]
    description: String,
}

#[derive(Debug, Deserialize, Validate)]
struct OwmMain {
    temp: f64,
    #[validate(range(min = 0, max = 100))]
    humidity: i32,
}

#[derive(Debug, Deserialize, Validate)]
struct OwmWind {
    #[validate(range(min = 0.0))]
    speed: f64,
}

#[derive(Debug, Deserialize, Validate)]
struct OwmSys {
    #[validate(length(equal = 2))]
    country: String,
}

impl OwmResponse {
    fn into_observation(mut self) -> WeatherObservation {
        // Validation guarantees at least one condition entry
        let condition = self.weather.swap_remove(0);
        WeatherObservation {
            temperature: self.main.temp,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            description: condition.description,
            city_name: self.name,
            country_code: self.sys.country,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    async fn fetch_current(
        &self,
        city: &str,
        country: &str,
        unit: Unit,
    ) -> HubResult<WeatherObservation> {
        debug!("Fetching current weather for {},{} ({})", city, country, unit);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", format!("{},{}", city, country).as_str()),
                ("appid", &self.api_key),
                ("units", unit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Provider request failed: {}", e);
                HubError::external_service(PROVIDER_NAME, e.to_string())
            })?;

        if response.status() != StatusCode::OK {
            warn!("Provider returned status {}", response.status());
            return Err(HubError::external_service(
                PROVIDER_NAME,
                format!("API error: status {}", response.status().as_u16()),
            ));
        }

        let raw: OwmResponse = response.json().await.map_err(|e| {
            warn!("Provider returned undecodable body: {}", e);
            HubError::external_service(PROVIDER_NAME, e.to_string())
        })?;

        raw.validate_request().map_err(|e| {
            warn!("Provider returned invalid schema: {}", e);
            HubError::external_service(PROVIDER_NAME, "provider returned invalid schema")
        })?;

        Ok(raw.into_observation())
    }
}

impl std::fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn owm_body() -> serde_json::Value {
        serde_json::json!({
            "coord": {"lon": 13.41, "lat": 52.52},
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
            "main": {"temp": 21.5, "temp_min": 19.0, "temp_max": 23.0, "pressure": 1012, "humidity": 60},
            "wind": {"speed": 3.2, "deg": 200},
            "sys": {"country": "DE", "sunrise": 1_700_000_000i64, "sunset": 1_700_040_000i64},
            "name": "Berlin",
            "cod": 200
        })
    }

    fn client_for(server: &MockServer) -> OpenWeatherMapClient {
        OpenWeatherMapClient::with_base_url("test-key", server.uri(), Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_current_happy_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "berlin,de"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(owm_body()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let observation = client
            .fetch_current("berlin", "de", Unit::Metric)
            .await
            .unwrap();

        assert_eq!(observation.temperature, 21.5);
        assert_eq!(observation.humidity, 60);
        assert_eq!(observation.wind_speed, 3.2);
        assert_eq!(observation.description, "scattered clouds");
        assert_eq!(observation.city_name, "Berlin");
        assert_eq!(observation.country_code, "DE");
    }

    #[tokio::test]
    async fn test_non_200_status_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "cod": 401, "message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_current("berlin", "de", Unit::Metric)
            .await
            .unwrap_err();

        match err {
            HubError::ExternalService { service, message } => {
                assert_eq!(service, PROVIDER_NAME);
                assert!(message.contains("401"));
            }
            other => panic!("expected ExternalService error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_schema_is_rejected() {
        let mut body = owm_body();
        body["main"]["humidity"] = serde_json::json!(150);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_current("berlin", "de", Unit::Metric)
            .await
            .unwrap_err();

        match err {
            HubError::ExternalService { message, .. } => {
                assert!(message.contains("invalid schema"));
            }
            other => panic!("expected ExternalService error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_conditions_is_rejected() {
        let mut body = owm_body();
        body["weather"] = serde_json::json!([]);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_current("berlin", "de", Unit::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, HubError::ExternalService { .. }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_current("berlin", "de", Unit::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, HubError::ExternalService { .. }));
    }
}
