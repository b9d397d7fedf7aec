//! # WeatherHub Service
//!
//! Business logic service layer for WeatherHub. Orchestrates the upstream
//! provider and the repository behind a single [`WeatherService`] trait.

pub mod dto;
pub mod r#impl;
pub mod weather_service;

pub use dto::*;
pub use r#impl::WeatherServiceImpl;
pub use weather_service::WeatherService;
