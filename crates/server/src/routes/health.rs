use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Pin the start time used for uptime. Called once when the server starts;
/// later calls return the same instant.
pub fn mark_started() -> SystemTime {
    *once_cell::sync::Lazy::force(&SERVER_START_TIME)
}

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "carelist-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
///
/// An empty dataset is still "ready": every query answers with a well-formed
/// empty result. The `dataset` field tells operators which case they are in.
pub async fn readiness_check(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let records = state.store.snapshot().len();
    let dataset = if records == 0 { "empty" } else { "loaded" };

    Ok(Json(json!({
        "status": "ready",
        "service": "carelist-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "components": {
            "api": "ready",
            "dataset": dataset,
        },
        "records": records,
    })))
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let handle = state.metrics.as_ref().ok_or(ServerError::RouteNotFound)?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_time_is_pinned_by_first_mark() {
        let started = mark_started();
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert_eq!(mark_started(), started);
        assert_eq!(*SERVER_START_TIME, started);
        assert!(uptime_seconds() < 60);
    }
}
