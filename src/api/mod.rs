//! API Module
//!
//! HTTP handlers and routing for the file cache REST API.
//!
//! # Endpoints
//! - `GET /cache/*key` - Retrieve a payload by key
//! - `PUT /cache/*key` - Store a payload
//! - `DELETE /cache/*key` - Delete a key
//! - `DELETE /cache` - Clean the whole cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
