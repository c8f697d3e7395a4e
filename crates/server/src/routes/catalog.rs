use crate::state::ServerState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

/// Distinct specialties with total and available head counts
pub async fn list_specialties(State(state): State<Arc<ServerState>>) -> Response {
    let engine = state.engine();
    Json(engine.specialties()).into_response()
}

/// Directory-wide statistics
pub async fn statistics(State(state): State<Arc<ServerState>>) -> Response {
    Json(state.engine().statistics()).into_response()
}
