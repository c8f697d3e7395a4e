use records::Record;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Optional filters for [`QueryEngine::list`](crate::QueryEngine::list).
///
/// Both filters are optional and combine with AND. `available` is already a
/// real boolean here: turning query-string text into a tri-state is the
/// caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Partial, case- and accent-insensitive match on the specialty.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Exact match on availability.
    #[serde(default)]
    pub available: Option<bool>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.specialty.is_none() && self.available.is_none()
    }
}

/// Which fields a text search scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Name pass, then specialty pass; results unioned.
    #[default]
    All,
    Name,
    Specialty,
    /// A kind the caller asked for that is neither `name` nor `specialty`.
    /// No pass runs and the result is empty.
    Unrecognized,
}

impl SearchScope {
    /// Map an optional `type` query parameter onto a scope.
    ///
    /// Absent or empty means [`All`](Self::All); only the exact lowercase
    /// kinds `name` and `specialty` narrow the search.
    pub fn from_param(kind: Option<&str>) -> Self {
        match kind {
            None | Some("") => SearchScope::All,
            Some("name") => SearchScope::Name,
            Some("specialty") => SearchScope::Specialty,
            Some(_) => SearchScope::Unrecognized,
        }
    }

    pub(crate) fn scans_name(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Name)
    }

    pub(crate) fn scans_specialty(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Specialty)
    }
}

/// Result of a filtered listing. `total` always equals `items.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<'a> {
    pub total: usize,
    pub items: Vec<&'a Record>,
}

impl<'a> Listing<'a> {
    pub(crate) fn new(items: Vec<&'a Record>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Per-specialty head count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyCount<'a> {
    pub name: &'a str,
    pub total_count: usize,
    pub available_count: usize,
}

/// Distinct specialties in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtySummary<'a> {
    pub total: usize,
    pub specialties: Vec<SpecialtyCount<'a>>,
}

/// Result of a text search. `term` is echoed exactly as the caller sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub term: String,
    pub total: usize,
    pub items: Vec<&'a Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostCommonSpecialty {
    pub name: String,
    pub count: usize,
}

/// Aggregate figures over the whole record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_records: usize,
    pub available_records: usize,
    pub unavailable_records: usize,
    pub total_specialties: usize,
    /// `None` only when there are no records.
    pub most_common_specialty: Option<MostCommonSpecialty>,
    /// One decimal and a trailing `%`, e.g. `"66.7%"`.
    pub availability_rate: String,
}

/// Errors returned by query operations.
///
/// `NotFound` and `InvalidArgument` are caller mistakes or misses; only
/// `Internal` reports a fault in the engine itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    #[error("professional {0} not found")]
    NotFound(i64),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unexpected fault while answering a query.
    #[error("internal query error: {0}")]
    Internal(String),
}

impl QueryError {
    /// Whether the request, rather than the service, caused the error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QueryError::NotFound(_) | QueryError::InvalidArgument(_))
    }
}
