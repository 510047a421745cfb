//! Error types for the file cache
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the file cache.
///
/// The public `FileCache` operations never return these for expected
/// conditions (miss, expiry, corruption, write failure); they surface as
/// `None` / `false`. Only construction and the HTTP layer expose them.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache root missing or not a directory
    #[error("Cache root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// Key rejected by validation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Entry bytes could not be decoded
    #[error("Corrupt entry: {0}")]
    Corrupt(String),

    /// Key not found in cache (absent, expired or corrupt)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Entry could not be written
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Underlying filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRoot(_)
            | CacheError::Corrupt(_)
            | CacheError::WriteFailed(_)
            | CacheError::Internal(_)
            | CacheError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the file cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (CacheError::InvalidKey("../x".to_string()), StatusCode::BAD_REQUEST),
            (CacheError::NotFound("key".to_string()), StatusCode::NOT_FOUND),
            (
                CacheError::WriteFailed("disk full".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CacheError::Internal("error".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CacheError::InvalidRoot(PathBuf::from("/nope")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_invalid_root_message_names_path() {
        let err = CacheError::InvalidRoot(PathBuf::from("/missing/cache"));
        assert!(err.to_string().contains("/missing/cache"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CacheError = io.into();
        assert!(matches!(err, CacheError::Io(_)));
    }
}
