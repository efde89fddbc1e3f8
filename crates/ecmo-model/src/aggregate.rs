use serde::{Deserialize, Serialize};

/// One distinct value and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCount {
    pub label: String,
    pub count: usize,
}

/// Value-frequency summary of one column, ordered by count descending with
/// first-encounter order breaking ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub entries: Vec<AggregateCount>,
}

impl AggregateResult {
    #[must_use]
    pub fn new(entries: Vec<AggregateCount>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts, i.e. how many non-blank cells were aggregated.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Count for one label, zero when absent.
    #[must_use]
    pub fn count_for(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregateCount> {
        self.entries.iter()
    }
}
