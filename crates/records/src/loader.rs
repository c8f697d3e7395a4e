use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::types::{Record, RecordSet};

/// Read and parse a JSON dataset.
///
/// The file must hold a JSON array. An element that does not form a valid
/// [`Record`] is logged and skipped; the rest of the dataset is still served.
/// Duplicate ids are logged, not rejected: lookups resolve to the first
/// occurrence in dataset order.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<RecordSet, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: Vec<Value> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let declared = raw.len();
    let records: RecordSet = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Record>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    error = %err,
                    "skipping malformed record"
                );
                None
            }
        })
        .collect();

    let skipped = declared - records.len();
    if skipped > 0 {
        tracing::warn!(
            path = %path.display(),
            skipped,
            kept = records.len(),
            "dataset contains malformed records"
        );
    }

    let duplicates = records.duplicate_ids();
    if !duplicates.is_empty() {
        tracing::warn!(
            path = %path.display(),
            duplicates = ?duplicates,
            "dataset contains duplicate ids, lookups resolve to the first occurrence"
        );
    }

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "dataset loaded"
    );

    Ok(records)
}

/// Startup variant of [`load_dataset`]: any failure is logged and replaced by
/// an empty set so every query still answers with a well-formed, empty result.
pub fn load_or_empty(path: impl AsRef<Path>) -> RecordSet {
    match load_dataset(path) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!(
                error = %err,
                path = %err.path().display(),
                "failed to load dataset, serving an empty directory"
            );
            RecordSet::empty()
        }
    }
}
