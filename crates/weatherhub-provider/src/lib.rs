//! Upstream weather data providers for WeatherHub.

pub mod openweathermap;
pub mod traits;

pub use openweathermap::OpenWeatherMapClient;
pub use traits::WeatherProvider;
