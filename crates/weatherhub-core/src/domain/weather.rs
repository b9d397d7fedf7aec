//! Weather record entity.

use crate::WeatherId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Measurement unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Celsius, meters per second.
    #[default]
    Metric,
    /// Fahrenheit, miles per hour.
    Imperial,
}

impl Unit {
    /// Returns the provider query-parameter form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted weather record.
///
/// The record is the single entity of the system: created from a provider
/// fetch, mutated through partial updates, and deleted by id. Serialization
/// is schema-stable JSON; the same encoding is used for cache values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Weather {
    /// Unique identifier, assigned at creation.
    pub id: WeatherId,

    /// City the measurement was requested for.
    pub city_name: String,

    /// ISO 3166-1 alpha-2 country code.
    pub country: String,

    /// Temperature in the requested unit system.
    pub temperature: f64,

    /// Unit system the measurements were fetched in.
    pub unit: Unit,

    /// Free-text condition summary from the provider.
    pub description: String,

    /// Relative humidity percentage (0-100).
    pub humidity: i32,

    /// Wind speed in the requested unit system.
    pub wind_speed: f64,

    /// When the data was obtained from the provider.
    pub fetched_at: DateTime<Utc>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Weather {
    /// Creates a new weather record from a provider observation.
    #[must_use]
    pub fn from_observation(
        city_name: String,
        country: String,
        unit: Unit,
        observation: WeatherObservation,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: WeatherId::new(),
            city_name,
            country,
            temperature: observation.temperature,
            unit,
            description: observation.description,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed,
            fetched_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable measurement fields and bumps `updated_at`.
    ///
    /// Identity fields (`id`, `city_name`, `country`, `unit`, `fetched_at`)
    /// are not touched by updates.
    pub fn apply_measurements(
        &mut self,
        temperature: f64,
        description: String,
        humidity: i32,
        wind_speed: f64,
    ) {
        self.temperature = temperature;
        self.description = description;
        self.humidity = humidity;
        self.wind_speed = wind_speed;
        self.updated_at = Utc::now();
    }
}

/// Validated weather data as returned by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub humidity: i32,
    pub wind_speed: f64,
    pub description: String,
    pub city_name: String,
    pub country_code: String,
}
