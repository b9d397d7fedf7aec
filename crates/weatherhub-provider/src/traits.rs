//! Provider trait definitions.

use async_trait::async_trait;
use weatherhub_core::{HubResult, Unit, WeatherObservation};

/// Upstream source of current weather data.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current weather for a city and country.
    async fn fetch_current(
        &self,
        city: &str,
        country: &str,
        unit: Unit,
    ) -> HubResult<WeatherObservation>;
}
