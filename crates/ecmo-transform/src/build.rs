use ecmo_model::{NormalizedTable, RawTable, Result};
use tracing::debug;

use crate::headers::normalize_headers;

/// Builds a normalized table from raw source data.
///
/// Headers are cleaned through [`normalize_headers`]; every row is squared
/// to header width, padding short rows with empty strings and dropping cells
/// beyond the last header. Row order is preserved.
pub fn build_table(raw: &RawTable) -> Result<NormalizedTable> {
    let names = normalize_headers(&raw.headers);
    let mut columns: Vec<(String, Vec<String>)> = names
        .into_iter()
        .map(|name| (name, Vec::with_capacity(raw.row_count())))
        .collect();

    for row in &raw.rows {
        for (index, (_, values)) in columns.iter_mut().enumerate() {
            let cell = row.get(index).map_or("", String::as_str);
            values.push(cell.to_string());
        }
    }

    let table = NormalizedTable::from_columns(columns)?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "built normalized table"
    );
    Ok(table)
}
