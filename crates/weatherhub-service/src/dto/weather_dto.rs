//! Weather-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use weatherhub_core::{rules, Unit, Weather, WeatherId};

/// Request to fetch current weather from the provider and store it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FetchWeatherRequest {
    #[validate(custom(function = rules::not_blank))]
    pub city_name: String,

    #[validate(length(equal = 2, message = "Country must be an ISO 3166-1 alpha-2 code"))]
    pub country: String,

    /// Unit system for the fetch. Defaults to metric.
    #[serde(default)]
    pub unit: Option<Unit>,
}

/// Request to overwrite the measurements of a stored record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWeatherRequest {
    pub temperature: f64,

    #[validate(custom(function = rules::not_blank))]
    pub description: String,

    #[validate(range(min = 0, max = 100, message = "Humidity must be 0-100"))]
    pub humidity: i32,

    #[validate(range(min = 0.0, message = "Wind speed cannot be negative"))]
    pub wind_speed: f64,
}

/// Weather record response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    pub id: WeatherId,
    pub city_name: String,
    pub country: String,
    pub temperature: f64,
    pub unit: Unit,
    pub description: String,
    pub humidity: i32,
    pub wind_speed: f64,
    pub fetched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Weather> for WeatherResponse {
    fn from(weather: Weather) -> Self {
        Self {
            id: weather.id,
            city_name: weather.city_name,
            country: weather.country,
            temperature: weather.temperature,
            unit: weather.unit,
            description: weather.description,
            humidity: weather.humidity,
            wind_speed: weather.wind_speed,
            fetched_at: weather.fetched_at,
            created_at: weather.created_at,
            updated_at: weather.updated_at,
        }
    }
}

/// Weather record list response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherListResponse {
    pub records: Vec<WeatherResponse>,
    pub total: usize,
}

impl From<Vec<Weather>> for WeatherListResponse {
    fn from(records: Vec<Weather>) -> Self {
        let records: Vec<WeatherResponse> = records.into_iter().map(WeatherResponse::from).collect();
        let total = records.len();
        Self { records, total }
    }
}
