//! Request DTOs for the file cache API
//!
//! Defines the query parameters accepted by the cache endpoints. Payloads
//! travel as raw request bodies.

use serde::Deserialize;

/// Query parameters for the SAVE operation (PUT /cache/*key)
///
/// # Fields
/// - `ttl`: Optional TTL in seconds (uses the cache default if not specified,
///   `<= 0` never expires)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveParams {
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
}
