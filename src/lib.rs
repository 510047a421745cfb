//! File Cache - A file-system-backed key/value cache
//!
//! Persists values as one file per key with TTL expiration enforced lazily
//! on read, plus an optional HTTP front end.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::FileCache;
pub use config::Config;
pub use error::CacheError;
