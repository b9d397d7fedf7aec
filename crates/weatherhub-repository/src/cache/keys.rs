//! Cache key generators for consistent key naming.

use weatherhub_core::WeatherId;

/// Prefix for weather record cache keys.
const WEATHER_PREFIX: &str = "weather";

/// Generate a cache key for a weather record by ID.
#[must_use]
pub fn weather_by_id(id: WeatherId) -> String {
    format!("{}:{}", WEATHER_PREFIX, id)
}
