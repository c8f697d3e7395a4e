use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::error::LoadError;
use crate::loader::load_dataset;
use crate::types::RecordSet;

/// Holder of the record set currently being served.
///
/// Readers take an `Arc` snapshot and run their whole query against it.
/// Replacing the dataset swaps the `Arc` in one step, so a query never sees a
/// mix of old and new records. The lock only guards the pointer, never the
/// scan.
#[derive(Debug, Default)]
pub struct RecordStore {
    current: RwLock<Arc<RecordSet>>,
}

impl RecordStore {
    pub fn new(records: RecordSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(records)),
        }
    }

    /// The set being served right now.
    pub fn snapshot(&self) -> Arc<RecordSet> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    /// Install `records` as the served set and return the one it replaced.
    ///
    /// Snapshots already handed out stay valid until their holders drop them.
    pub fn replace(&self, records: RecordSet) -> Arc<RecordSet> {
        let next = Arc::new(records);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, next)
    }

    /// Re-read the dataset at `path` and swap it in.
    ///
    /// On failure the current snapshot keeps being served.
    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let records = load_dataset(path)?;
        let count = records.len();
        let previous = self.replace(records);

        tracing::info!(
            previous_records = previous.len(),
            current_records = count,
            "dataset reloaded"
        );

        Ok(count)
    }
}
