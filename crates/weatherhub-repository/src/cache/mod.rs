//! Caching infrastructure for the repository layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! The cached repository decorator in [`crate::cached`] builds on it.

pub mod keys;
mod redis;
mod store;

pub use redis::RedisCacheStore;
pub use store::CacheStore;
