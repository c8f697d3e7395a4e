use crate::error::{ServerError, ServerResult};
use crate::routes::{first_value, QueryPairs};
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use query::{QueryError, SearchScope};
use records::Record;
use serde::Serialize;
use std::sync::Arc;

const MISSING_TERM: &str = "search term 'q' is required";

/// Query parameters for search
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term (required, non-empty)
    pub q: Option<String>,

    /// Field to search (the `type` parameter): "name", "specialty", or absent
    /// for both
    pub kind: Option<String>,
}

impl SearchQuery {
    /// Pick the search parameters out of the raw query string.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first_value(pairs, "q"),
            kind: first_value(pairs, "type"),
        }
    }
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub term: String,
    pub total: usize,
    pub professionals: Vec<&'a Record>,
}

/// Search professionals by name and/or specialty
pub async fn search_professionals(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<Response> {
    let Query(pairs) = query?;
    let query = SearchQuery::from_pairs(&pairs);

    let term = query.q.unwrap_or_default();
    let scope = SearchScope::from_param(query.kind.as_deref());

    let engine = state.engine();
    let results = engine.search(&term, scope).map_err(|err| match err {
        QueryError::InvalidArgument(_) => ServerError::BadRequest(MISSING_TERM.to_string()),
        other => other.into(),
    })?;

    Ok(Json(SearchResponse {
        term: results.term,
        total: results.total,
        professionals: results.items,
    })
    .into_response())
}
