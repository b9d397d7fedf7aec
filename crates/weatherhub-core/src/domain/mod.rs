//! Domain entities and value objects.

pub mod weather;

pub use weather::*;
