//! Weather record controller.

use crate::{
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;
use weatherhub_core::{HubError, WeatherId};
use weatherhub_service::{
    FetchWeatherRequest, UpdateWeatherRequest, WeatherListResponse, WeatherResponse,
};

/// Creates the weather router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(fetch_weather))
        .route(
            "/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
        .route("/latest/:city_name", get(get_latest_by_city))
}

fn parse_weather_id(id: &str) -> Result<WeatherId, AppError> {
    WeatherId::parse(id)
        .map_err(|_| AppError(HubError::validation(format!("Invalid record ID: {}", id))))
}

/// Fetch current weather from the provider and store it.
#[utoipa::path(
    post,
    path = "/weather",
    tag = "weather",
    request_body = FetchWeatherRequest,
    responses(
        (status = 201, description = "Weather record created", body = WeatherResponse),
        (status = 400, description = "Invalid request"),
        (status = 503, description = "Upstream provider unavailable")
    )
)]
pub async fn fetch_weather(
    State(state): State<AppState>,
    Json(request): Json<FetchWeatherRequest>,
) -> Result<(StatusCode, Json<crate::responses::ApiResponse<WeatherResponse>>), AppError> {
    debug!(
        "Fetch weather request: {},{}",
        request.city_name, request.country
    );

    let response = state.weather_service.fetch_and_store(request).await?;
    Ok(created(response))
}

/// List all stored weather records.
#[utoipa::path(
    get,
    path = "/weather",
    tag = "weather",
    responses(
        (status = 200, description = "All weather records", body = WeatherListResponse)
    )
)]
pub async fn list_records(State(state): State<AppState>) -> ApiResult<WeatherListResponse> {
    debug!("List weather records request");

    let response = state.weather_service.list_records().await?;
    ok(response)
}

/// Get a weather record by ID.
#[utoipa::path(
    get,
    path = "/weather/{id}",
    tag = "weather",
    params(
        ("id" = String, Path, description = "Weather record ID")
    ),
    responses(
        (status = 200, description = "Weather record", body = WeatherResponse),
        (status = 400, description = "Invalid record ID"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<WeatherResponse> {
    debug!("Get weather record request: {}", id);

    let id = parse_weather_id(&id)?;
    let response = state.weather_service.get_record(id).await?;
    ok(response)
}

/// Get the most recently fetched record for a city.
#[utoipa::path(
    get,
    path = "/weather/latest/{city_name}",
    tag = "weather",
    params(
        ("city_name" = String, Path, description = "City name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Latest weather record for the city", body = WeatherResponse),
        (status = 404, description = "No record for the city")
    )
)]
pub async fn get_latest_by_city(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> ApiResult<WeatherResponse> {
    debug!("Get latest weather record request: {}", city_name);

    let response = state.weather_service.get_latest_by_city(&city_name).await?;
    ok(response)
}

/// Overwrite the measurements of a stored record.
#[utoipa::path(
    put,
    path = "/weather/{id}",
    tag = "weather",
    params(
        ("id" = String, Path, description = "Weather record ID")
    ),
    request_body = UpdateWeatherRequest,
    responses(
        (status = 200, description = "Updated weather record", body = WeatherResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateWeatherRequest>,
) -> ApiResult<WeatherResponse> {
    debug!("Update weather record request: {}", id);

    let id = parse_weather_id(&id)?;
    let response = state.weather_service.update_record(id, request).await?;
    ok(response)
}

/// Delete a weather record.
#[utoipa::path(
    delete,
    path = "/weather/{id}",
    tag = "weather",
    params(
        ("id" = String, Path, description = "Weather record ID")
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 400, description = "Invalid record ID"),
        (status = 404, description = "Record not found")
    )
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete weather record request: {}", id);

    let id = parse_weather_id(&id)?;
    state.weather_service.delete_record(id).await?;

    Ok(no_content())
}
