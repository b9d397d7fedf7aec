//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{HealthResponse, ReadinessResponse};
use utoipa::OpenApi;
use weatherhub_core::{ErrorResponse, FieldError, Unit, WeatherId};
use weatherhub_service::{
    FetchWeatherRequest, UpdateWeatherRequest, WeatherListResponse, WeatherResponse,
};

/// OpenAPI documentation for the WeatherHub API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WeatherHub API",
        version = "1.0.0",
        description = "Weather data collection and retrieval API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Weather endpoints
        crate::controllers::weather_controller::fetch_weather,
        crate::controllers::weather_controller::list_records,
        crate::controllers::weather_controller::get_record,
        crate::controllers::weather_controller::get_latest_by_city,
        crate::controllers::weather_controller::update_record,
        crate::controllers::weather_controller::delete_record,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            WeatherId,
            Unit,
            ErrorResponse,
            FieldError,
            FetchWeatherRequest,
            UpdateWeatherRequest,
            WeatherResponse,
            WeatherListResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "weather", description = "Weather record endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
