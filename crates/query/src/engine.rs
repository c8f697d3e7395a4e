use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use canonical::TermMatcher;
use records::{Record, RecordSet, RecordStore};

use crate::types::{
    ListFilter, Listing, MostCommonSpecialty, QueryError, SearchResults, SearchScope,
    SpecialtyCount, SpecialtySummary, Statistics,
};


/// Read-only query surface over one record set snapshot.
///
/// Every operation is a pure function of the snapshot and its arguments.
/// Engines are cheap to build (one `Arc` clone), so callers create one per
/// request from the current [`RecordStore`] snapshot and drop it afterwards.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    records: Arc<RecordSet>,
}

impl QueryEngine {
    pub fn new(records: Arc<RecordSet>) -> Self {
        Self { records }
    }

    /// Engine over whatever the store is serving right now.
    pub fn from_store(store: &RecordStore) -> Self {
        Self::new(store.snapshot())
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Records matching every filter present in `filter`, in dataset order.
    pub fn list(&self, filter: &ListFilter) -> Listing<'_> {
        let specialty = filter.specialty.as_deref().map(TermMatcher::new);

        let items: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| {
                specialty
                    .as_ref()
                    .is_none_or(|term| term.matches(&record.specialty))
            })
            .filter(|record| {
                filter
                    .available
                    .is_none_or(|available| record.available == available)
            })
            .collect();

        tracing::debug!(
            specialty = ?filter.specialty,
            available = ?filter.available,
            matched = items.len(),
            "list"
        );

        Listing::new(items)
    }

    /// Exact `id` lookup. Duplicate ids resolve to the first in dataset order.
    pub fn get_by_id(&self, id: i64) -> Result<&Record, QueryError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(QueryError::NotFound(id))
    }

    /// Distinct specialties with head counts, in first-seen order.
    ///
    /// Spellings are compared exactly: "Cardiologia" and "cardiologia" are two
    /// entries here even though search treats them alike.
    pub fn specialties(&self) -> SpecialtySummary<'_> {
        let specialties = self.tally();
        SpecialtySummary {
            total: specialties.len(),
            specialties,
        }
    }

    /// Accent- and case-insensitive substring search over names and/or
    /// specialties.
    ///
    /// Name matches come first, then specialty matches; a record found by
    /// both passes (or repeated under the same id) is kept once, at its first
    /// position.
    pub fn search(&self, term: &str, scope: SearchScope) -> Result<SearchResults<'_>, QueryError> {
        if term.is_empty() {
            return Err(QueryError::InvalidArgument(
                "search term must not be empty".into(),
            ));
        }

        let matcher = TermMatcher::new(term);
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        if scope.scans_name() {
            for record in self.records.iter() {
                if matcher.matches(&record.name) && seen.insert(record.id) {
                    items.push(record);
                }
            }
        }

        if scope.scans_specialty() {
            for record in self.records.iter() {
                if matcher.matches(&record.specialty) && seen.insert(record.id) {
                    items.push(record);
                }
            }
        }

        if scope == SearchScope::Unrecognized {
            tracing::debug!(term, "search kind not recognized, no field scanned");
        }

        tracing::debug!(term, scope = ?scope, matched = items.len(), "search");

        Ok(SearchResults {
            term: term.to_string(),
            total: items.len(),
            items,
        })
    }

    /// Totals, availability and the most common specialty.
    pub fn statistics(&self) -> Statistics {
        let total_records = self.records.len();
        let available_records = self.records.iter().filter(|r| r.available).count();
        let tally = self.tally();

        // Strictly-greater keeps the first-seen specialty on ties.
        let mut most_common: Option<&SpecialtyCount<'_>> = None;
        for entry in &tally {
            if most_common.is_none_or(|best| entry.total_count > best.total_count) {
                most_common = Some(entry);
            }
        }

        Statistics {
            total_records,
            available_records,
            unavailable_records: total_records - available_records,
            total_specialties: tally.len(),
            most_common_specialty: most_common.map(|entry| MostCommonSpecialty {
                name: entry.name.to_string(),
                count: entry.total_count,
            }),
            availability_rate: availability_rate(available_records, total_records),
        }
    }

    /// One grouped pass producing per-specialty counts in first-seen order.
    fn tally(&self) -> Vec<SpecialtyCount<'_>> {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut tally: Vec<SpecialtyCount<'_>> = Vec::new();

        for record in self.records.iter() {
            let slot = *slots.entry(record.specialty.as_str()).or_insert_with(|| {
                tally.push(SpecialtyCount {
                    name: record.specialty.as_str(),
                    total_count: 0,
                    available_count: 0,
                });
                tally.len() - 1
            });

            let entry = &mut tally[slot];
            entry.total_count += 1;
            if record.available {
                entry.available_count += 1;
            }
        }

        tally
    }
}

/// `available / total` as a percentage with one decimal, rounded half up.
///
/// Computed in integers so the same counts always render the same string.
/// An empty set reports `"0.0%"`.
///
/// ```rust
/// use query::availability_rate;
///
/// assert_eq!(availability_rate(1, 2), "50.0%");
/// assert_eq!(availability_rate(2, 3), "66.7%");
/// assert_eq!(availability_rate(0, 0), "0.0%");
/// ```
pub fn availability_rate(available: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }

    let available = available as u128;
    let total = total as u128;
    let tenths = (available * 2000 + total) / (2 * total);

    format!("{}.{}%", tenths / 10, tenths % 10)
}
