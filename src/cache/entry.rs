//! Cache Entry Module
//!
//! Defines the unit persisted per key and its on-disk encoding.
//!
//! Entries are stored as a JSON object with the named fields `created_at`,
//! `ttl_seconds` and `payload`. A file that is still being written is an
//! unterminated document and fails to parse.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Cache Entry ==
/// Represents a single cache entry with payload and expiry metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Creation timestamp (Unix seconds)
    pub created_at: i64,
    /// Lifetime in seconds, zero or negative = never expires
    pub ttl_seconds: i64,
    /// Encoded caller value
    pub payload: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    ///
    /// # Arguments
    /// * `payload` - The encoded value to store
    /// * `ttl_seconds` - Lifetime in seconds (`<= 0` means immortal)
    pub fn new(payload: Vec<u8>, ttl_seconds: i64) -> Self {
        Self {
            created_at: current_timestamp(),
            ttl_seconds,
            payload,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to `now`.
    ///
    /// Boundary condition: the entry is still valid at exactly
    /// `created_at + ttl_seconds` and expires one second later.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.ttl_seconds > 0 && now > self.created_at.saturating_add(self.ttl_seconds)
    }

    /// Checks if the entry has expired at the current wall-clock second.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp())
    }

    // == Encode ==
    /// Serializes the entry into its on-disk byte form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| CacheError::Internal(e.to_string()))
    }

    // == Decode ==
    /// Parses an entry from its on-disk byte form.
    ///
    /// Truncated documents, trailing bytes and missing fields all fail with
    /// `CacheError::Corrupt`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| CacheError::Corrupt(e.to_string()))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}
