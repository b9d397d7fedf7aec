//! # WeatherHub Core
//!
//! Core types, domain entities, and error definitions for WeatherHub.
//! This crate provides the foundational abstractions shared by the
//! repository, service, and API layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
