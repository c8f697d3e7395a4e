use crate::error::{ServerError, ServerResult};
use crate::routes::{first_value, QueryPairs};
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use query::ListFilter;
use records::Record;
use serde::Serialize;
use std::sync::Arc;

/// Query parameters for the professional listing
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Partial, accent-insensitive specialty filter
    pub specialty: Option<String>,

    /// Raw availability flag; only `true` and `false` are honoured
    pub available: Option<String>,
}

impl ListQuery {
    /// Pick the listing parameters out of the raw query string.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            specialty: first_value(pairs, "specialty"),
            available: first_value(pairs, "available"),
        }
    }

    /// Turn raw query text into engine filters.
    ///
    /// An empty `specialty` is treated as absent. An `available` value other
    /// than `true`/`false` leaves the availability filter off.
    pub fn to_filter(&self) -> ListFilter {
        ListFilter {
            specialty: self
                .specialty
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            available: parse_availability(self.available.as_deref()),
        }
    }
}

/// Tri-state availability flag: absent, `true` or `false`.
pub fn parse_availability(raw: Option<&str>) -> Option<bool> {
    match raw? {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            tracing::debug!(value = other, "ignoring unrecognized availability filter");
            None
        }
    }
}

/// Listing response
#[derive(Debug, Serialize)]
pub struct ProfessionalsResponse<'a> {
    pub total: usize,
    pub professionals: Vec<&'a Record>,
}

/// List professionals, optionally filtered by specialty and availability
pub async fn list_professionals(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<Response> {
    let Query(pairs) = query?;
    let filter = ListQuery::from_pairs(&pairs).to_filter();

    let engine = state.engine();
    let listing = engine.list(&filter);

    Ok(Json(ProfessionalsResponse {
        total: listing.total,
        professionals: listing.items,
    })
    .into_response())
}

/// Fetch a single professional by id
///
/// An id that is not an integer cannot match any record and is answered
/// like any other unknown id.
pub async fn get_professional(
    State(state): State<Arc<ServerState>>,
    Path(raw_id): Path<String>,
) -> ServerResult<Response> {
    let id: i64 = raw_id.trim().parse().map_err(|_| {
        tracing::debug!(id = %raw_id, "non-numeric professional id");
        ServerError::ProfessionalNotFound
    })?;

    let engine = state.engine();
    let record = engine.get_by_id(id)?;

    Ok(Json(record).into_response())
}
