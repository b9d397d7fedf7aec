//! PostgreSQL weather repository implementation.

use crate::{pool::DatabasePool, traits::WeatherRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use weatherhub_core::{HubError, HubResult, Unit, Weather, WeatherId};

/// PostgreSQL weather repository implementation.
#[derive(Clone)]
pub struct PgWeatherRepository {
    pool: Arc<DatabasePool>,
}

impl PgWeatherRepository {
    /// Creates a new PostgreSQL weather repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a weather record.
#[derive(Debug, FromRow)]
struct WeatherRow {
    id: Uuid,
    city_name: String,
    country: String,
    temperature: f64,
    unit: String,
    description: String,
    humidity: i32,
    wind_speed: f64,
    fetched_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<WeatherRow> for Weather {
    type Error = HubError;

    fn try_from(row: WeatherRow) -> Result<Self, Self::Error> {
        Ok(Weather {
            id: WeatherId::from_uuid(row.id),
            city_name: row.city_name,
            country: row.country,
            temperature: row.temperature,
            unit: parse_unit(&row.unit),
            description: row.description,
            humidity: row.humidity,
            wind_speed: row.wind_speed,
            fetched_at: row.fetched_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn parse_unit(s: &str) -> Unit {
    match s.to_lowercase().as_str() {
        "imperial" => Unit::Imperial,
        _ => Unit::Metric,
    }
}

const SELECT_COLUMNS: &str = "id, city_name, country, temperature, unit, description, \
     humidity, wind_speed, fetched_at, created_at, updated_at";

#[async_trait]
impl WeatherRepository for PgWeatherRepository {
    async fn save(&self, weather: &Weather) -> HubResult<Weather> {
        debug!("Repository: save weather record for {}", weather.city_name);

        let row = sqlx::query_as::<_, WeatherRow>(
            r#"
            INSERT INTO weather_records (id, city_name, country, temperature, unit,
                                         description, humidity, wind_speed,
                                         fetched_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, city_name, country, temperature, unit, description,
                      humidity, wind_speed, fetched_at, created_at, updated_at
            "#,
        )
        .bind(weather.id.into_inner())
        .bind(&weather.city_name)
        .bind(&weather.country)
        .bind(weather.temperature)
        .bind(weather.unit.as_str())
        .bind(&weather.description)
        .bind(weather.humidity)
        .bind(weather.wind_speed)
        .bind(weather.fetched_at)
        .bind(weather.created_at)
        .bind(weather.updated_at)
        .fetch_one(self.pool.inner())
        .await?;

        Weather::try_from(row)
    }

    async fn find_all(&self) -> HubResult<Vec<Weather>> {
        debug!("Repository: find all weather records");

        let rows = sqlx::query_as::<_, WeatherRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM weather_records ORDER BY fetched_at DESC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Weather::try_from).collect()
    }

    async fn find_by_id(&self, id: WeatherId) -> HubResult<Option<Weather>> {
        debug!("Repository: find weather record by id {}", id);

        let row = sqlx::query_as::<_, WeatherRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM weather_records WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Weather::try_from).transpose()
    }

    async fn find_latest_by_city(&self, city_name: &str) -> HubResult<Option<Weather>> {
        debug!("Repository: find latest weather record for city {}", city_name);

        let row = sqlx::query_as::<_, WeatherRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS} FROM weather_records
            WHERE LOWER(city_name) = LOWER($1)
            ORDER BY fetched_at DESC
            LIMIT 1
            "#
        ))
        .bind(city_name)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Weather::try_from).transpose()
    }

    async fn update(&self, weather: &Weather) -> HubResult<Weather> {
        debug!("Repository: update weather record {}", weather.id);

        let row = sqlx::query_as::<_, WeatherRow>(
            r#"
            UPDATE weather_records
            SET temperature = $1, description = $2, humidity = $3,
                wind_speed = $4, updated_at = $5
            WHERE id = $6
            RETURNING id, city_name, country, temperature, unit, description,
                      humidity, wind_speed, fetched_at, created_at, updated_at
            "#,
        )
        .bind(weather.temperature)
        .bind(&weather.description)
        .bind(weather.humidity)
        .bind(weather.wind_speed)
        .bind(weather.updated_at)
        .bind(weather.id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Weather::try_from).transpose()?.ok_or_else(|| {
            HubError::not_found("weather record", weather.id.to_string())
        })
    }

    async fn delete(&self, id: WeatherId) -> HubResult<bool> {
        debug!("Repository: delete weather record {}", id);

        let result = sqlx::query("DELETE FROM weather_records WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgWeatherRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgWeatherRepository").finish_non_exhaustive()
    }
}
