//! HTTP controllers.

pub mod health_controller;
pub mod weather_controller;
