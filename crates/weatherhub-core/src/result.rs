//! Result type aliases for WeatherHub.

use crate::HubError;

/// A specialized `Result` type for WeatherHub operations.
pub type HubResult<T> = Result<T, HubError>;
