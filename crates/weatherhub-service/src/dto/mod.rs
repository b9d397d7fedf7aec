//! Data transfer objects for the service layer.

mod weather_dto;

pub use weather_dto::{
    FetchWeatherRequest, UpdateWeatherRequest, WeatherListResponse, WeatherResponse,
};
