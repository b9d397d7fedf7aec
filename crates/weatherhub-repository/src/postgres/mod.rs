//! PostgreSQL repository implementations.

mod weather_repository;

pub use weather_repository::PgWeatherRepository;
