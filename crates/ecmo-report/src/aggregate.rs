use std::collections::BTreeMap;

use chrono::NaiveDate;
use ecmo_model::{AggregateCount, AggregateResult, NormalizedTable};
use ecmo_transform::parse_case_date;

/// Counts occurrences of each distinct trimmed value in a column.
///
/// `column` is the already-resolved column name; passing `None` (an
/// unresolved field) yields an empty result, as does a name the table does
/// not carry. Values empty after trimming are excluded rather than bucketed.
/// Entries are ordered by count descending, ties keeping first-encounter
/// order.
#[must_use]
pub fn count_by(table: &NormalizedTable, column: Option<&str>) -> AggregateResult {
    let Some(values) = column.and_then(|name| table.column(name)) else {
        return AggregateResult::default();
    };

    let mut entries: Vec<AggregateCount> = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        match entries.iter_mut().find(|entry| entry.label == trimmed) {
            Some(entry) => entry.count += 1,
            None => entries.push(AggregateCount {
                label: trimmed.to_string(),
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-encounter order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    AggregateResult::new(entries)
}

/// Per-day counts of parseable dates in a column, ascending by date.
///
/// Rows whose cell does not parse as a date are left out. Used for the
/// initiations-over-time series.
#[must_use]
pub fn daily_counts(table: &NormalizedTable, column: Option<&str>) -> Vec<(NaiveDate, usize)> {
    let Some(values) = column.and_then(|name| table.column(name)) else {
        return Vec::new();
    };

    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for value in values {
        if let Some(date) = parse_case_date(value) {
            *counts.entry(date).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}
