//! Workspace umbrella crate for the carelist healthcare professional directory.
//!
//! This crate stitches together dataset loading, snapshot storage and the
//! query engine so library callers can work with a single [`Directory`]
//! handle instead of wiring `records` and `query` by hand. The HTTP service
//! lives in the `carelist-server` crate and builds on the same pieces.
//!
//! ```no_run
//! use carelist::{Directory, SearchScope};
//!
//! let directory = Directory::open("data/professionals.json")?;
//! let engine = directory.engine();
//! let hits = engine.search("joao", SearchScope::Name)?;
//! println!("{} match(es)", hits.total);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use canonical::{TermMatcher, contains_normalized, normalize};
pub use query::{
    ListFilter, Listing, MostCommonSpecialty, QueryEngine, QueryError, SearchResults,
    SearchScope, SpecialtyCount, SpecialtySummary, Statistics, availability_rate,
};
pub use records::{LoadError, Record, RecordSet, RecordStore, load_dataset, load_or_empty};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A dataset file paired with the snapshot currently loaded from it.
#[derive(Debug)]
pub struct Directory {
    path: PathBuf,
    store: Arc<RecordStore>,
}

impl Directory {
    /// Load the dataset at `path`, failing if it cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let records = load_dataset(&path)?;
        Ok(Self::with_records(path, records))
    }

    /// Load the dataset at `path`, falling back to an empty directory.
    pub fn open_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = load_or_empty(&path);
        Self::with_records(path, records)
    }

    /// Serve `records` as if they had been read from `path`.
    pub fn with_records(path: impl Into<PathBuf>, records: RecordSet) -> Self {
        Self {
            path: path.into(),
            store: Arc::new(RecordStore::new(records)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<RecordStore> {
        Arc::clone(&self.store)
    }

    /// Engine over the snapshot current at the time of the call.
    pub fn engine(&self) -> QueryEngine {
        QueryEngine::from_store(&self.store)
    }

    /// Re-read the dataset file. The previous snapshot stays on failure.
    pub fn reload(&self) -> Result<usize, LoadError> {
        let result = self.store.reload_from(&self.path);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "reload failed, keeping current dataset");
        }
        result
    }
}
