use crate::normalize::normalize;

/// A query term reduced to its comparison key once, then tested against many
/// candidate values.
///
/// Search scans every record per pass; normalizing the term up front keeps
/// the per-record cost to a single normalization of the candidate field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatcher {
    key: String,
}

impl TermMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            key: normalize(term),
        }
    }

    /// The normalized form of the term.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when the term normalized to nothing and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Partial, case- and accent-insensitive containment of the term in `candidate`.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.key.is_empty() {
            return true;
        }
        normalize(candidate).contains(self.key.as_str())
    }
}
