//! Core data model: a professional [`Record`] and the ordered [`RecordSet`].
//!
//! # Shape on disk
//!
//! A dataset is a JSON array of objects:
//!
//! ```json
//! [
//!   { "id": 1, "name": "João Silva", "specialty": "Cardiologia", "available": true,
//!     "crm": "CRM-SP 12345" }
//! ]
//! ```
//!
//! `id`, `name`, `specialty` and `available` are required; the loader skips
//! elements that lack one of them. Every other key is
//! kept verbatim in [`Record::extra`] and written back out on serialization.
//! The Portuguese keys used by the clinic's original export (`nome`,
//! `especialidade`, `disponivel`) are accepted as aliases.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One professional's profile entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Dataset-assigned identifier. Unique within a set, never generated here.
    pub id: i64,

    #[serde(alias = "nome")]
    pub name: String,

    #[serde(alias = "especialidade")]
    pub specialty: String,

    #[serde(alias = "disponivel")]
    pub available: bool,

    /// Dataset-defined fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        specialty: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            available,
            extra: Map::new(),
        }
    }

    /// Attach a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The full collection of records, in dataset order.
///
/// Order is whatever the dataset declared; nothing here sorts by `id`, and
/// lookups go through equality rather than position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Ids that occur more than once, each reported once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = HashSet::with_capacity(self.records.len());
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.records {
            if !seen.insert(record.id) && reported.insert(record.id) {
                duplicates.push(record.id);
            }
        }
        duplicates
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
