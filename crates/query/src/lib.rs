//! # carelist query engine (`query`)
//!
//! ## Purpose
//!
//! `query` answers every read the directory supports over one immutable
//! [`RecordSet`](records::RecordSet) snapshot:
//!
//! - [`QueryEngine::list`]: optional specialty (partial, accent-insensitive)
//!   and availability (exact) filters, combined with AND.
//! - [`QueryEngine::get_by_id`]: exact id lookup.
//! - [`QueryEngine::specialties`]: distinct specialties with total and
//!   available head counts, in first-seen order.
//! - [`QueryEngine::search`]: free-text search over names and/or
//!   specialties, merged and deduplicated by id.
//! - [`QueryEngine::statistics`]: totals, most common specialty and the
//!   availability rate.
//!
//! The engine owns no I/O and no mutable state. It holds an `Arc` to the
//! snapshot it was built from, so it can be created per request and shared
//! across threads freely.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use records::{Record, RecordSet};
//! use query::{ListFilter, QueryEngine, SearchScope};
//!
//! let engine = QueryEngine::new(Arc::new(RecordSet::new(vec![
//!     Record::new(1, "João Silva", "Cardiologia", true),
//!     Record::new(2, "Maria Souza", "Pediatria", false),
//! ])));
//!
//! let cardio = engine.list(&ListFilter::new().with_specialty("cardio"));
//! assert_eq!(cardio.total, 1);
//!
//! let hits = engine.search("joao", SearchScope::All).expect("non-empty term");
//! assert_eq!(hits.items[0].id, 1);
//!
//! assert_eq!(engine.statistics().availability_rate, "50.0%");
//! ```

pub mod engine;
pub mod types;

pub use crate::engine::{availability_rate, QueryEngine};
pub use crate::types::{
    ListFilter, Listing, MostCommonSpecialty, QueryError, SearchResults, SearchScope,
    SpecialtyCount, SpecialtySummary, Statistics,
};
