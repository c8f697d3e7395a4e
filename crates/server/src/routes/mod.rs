//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: liveness, readiness and Prometheus metrics
//! - `professionals`: filtered listing and lookup by id
//! - `search`: free-text search over names and specialties
//! - `catalog`: specialty head counts and directory statistics

pub mod catalog;
pub mod health;
pub mod professionals;
pub mod search;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Raw query-string pairs in request order.
///
/// Handlers extract this instead of a typed struct so a repeated key is never
/// a deserialization failure: the first occurrence wins.
pub type QueryPairs = Vec<(String, String)>;

/// First value supplied for `key`, if any.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// API version and base info
///
/// Root endpoint (GET /) describing the service and its routes.
///
/// # Response
///
/// ```json
/// {
///   "name": "carelist",
///   "version": "0.1.0",
///   "description": "...",
///   "endpoints": { "GET /professionals": "..." }
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "carelist",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Availability lookup for the clinic's healthcare professionals",
        "endpoints": {
            "GET /professionals": "List professionals, optionally filtered by ?specialty= and ?available=",
            "GET /professionals/{id}": "Fetch one professional by id",
            "GET /specialties": "List specialties with total and available head counts",
            "GET /search": "Search professionals by name or specialty (?q=, optional ?type=name|specialty)",
            "GET /statistics": "Directory-wide availability statistics",
            "GET /health": "Liveness probe",
            "GET /ready": "Readiness probe",
            "GET /metrics": "Prometheus metrics"
        }
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::RouteNotFound
}
