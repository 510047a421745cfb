//! API Handlers
//!
//! HTTP request handlers for each file cache endpoint. Cache calls touch the
//! disk, so they run on the blocking thread pool.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::cache::{validate_key, FileCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{CleanResponse, DeleteResponse, HealthResponse, SaveParams, SaveResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared file cache
    pub cache: Arc<FileCache>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: FileCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// `CacheError::InvalidRoot` if the configured cache directory does not exist.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = FileCache::open(&config.cache_dir)?.with_default_ttl(config.default_ttl);
        Ok(Self::new(cache))
    }
}

/// Runs a cache operation on the blocking pool.
async fn run_blocking<T, F>(state: &AppState, op: F) -> Result<T>
where
    F: FnOnce(&FileCache) -> T + Send + 'static,
    T: Send + 'static,
{
    let cache = Arc::clone(&state.cache);
    tokio::task::spawn_blocking(move || op(&cache))
        .await
        .map_err(|e| CacheError::Internal(e.to_string()))
}

/// Handler for PUT /cache/*key
///
/// Stores the raw request body under `key` with an optional `ttl` query
/// parameter.
pub async fn save_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<SaveParams>,
    body: Bytes,
) -> Result<Json<SaveResponse>> {
    validate_key(&key)?;

    let ttl = params.ttl.unwrap_or(state.cache.default_ttl());
    let saved = {
        let key = key.clone();
        run_blocking(&state, move |cache| cache.save(&key, &body, Some(ttl))).await?
    };

    if !saved {
        return Err(CacheError::WriteFailed(format!("could not save '{}'", key)));
    }

    Ok(Json(SaveResponse::new(key, ttl)))
}

/// Handler for GET /cache/*key
///
/// Returns the stored payload as `application/octet-stream`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse> {
    validate_key(&key)?;

    let value = {
        let key = key.clone();
        run_blocking(&state, move |cache| cache.get(&key)).await?
    };

    match value {
        Some(bytes) => Ok(([(header::CONTENT_TYPE, "application/octet-stream")], bytes)),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /cache/*key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    validate_key(&key)?;

    let deleted = {
        let key = key.clone();
        run_blocking(&state, move |cache| cache.delete(&key)).await?
    };

    if !deleted {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for DELETE /cache
///
/// Removes every entry file under the cache root.
pub async fn clean_handler(State(state): State<AppState>) -> Result<Json<CleanResponse>> {
    let cleaned = run_blocking(&state, |cache| cache.clean()).await?;
    Ok(Json(CleanResponse { cleaned }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
