use ecmo_model::{FieldMap, FilterSpec, NormalizedTable, Selection};
use tracing::debug;

/// Applies a filter conjunction to the table.
///
/// A row survives when every `Equals` constraint on a resolved field matches
/// its cell exactly, case sensitively. Constraints on unresolved fields are
/// vacuously satisfied so a view never errors just because an expected
/// column is absent. An empty or all-`Any` spec returns the table unchanged.
#[must_use]
pub fn apply_filters(
    table: &NormalizedTable,
    fields: &FieldMap,
    spec: &FilterSpec,
) -> NormalizedTable {
    let active: Vec<(&str, &str)> = spec
        .constraints()
        .iter()
        .filter_map(|(field, selection)| match selection {
            Selection::Any => None,
            Selection::Equals(value) => fields
                .column(*field)
                .map(|column| (column, value.as_str())),
        })
        .collect();

    if active.is_empty() {
        return table.clone();
    }

    let mask: Vec<bool> = (0..table.row_count())
        .map(|row| {
            active
                .iter()
                .all(|(column, value)| table.value(row, column) == Some(*value))
        })
        .collect();
    let kept = table.filter_rows(&mask);
    debug!(
        constraints = active.len(),
        before = table.row_count(),
        after = kept.row_count(),
        "applied row filters"
    );
    kept
}
