//! # WeatherHub REST
//!
//! REST API layer using Axum for WeatherHub.
//! Provides HTTP endpoints for weather record management and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
