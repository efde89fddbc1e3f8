//! Synthetic display columns layered onto the normalized table.

use chrono::NaiveDate;
use ecmo_model::{CanonicalField, FieldMap, NormalizedTable, Result};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use crate::datetime::parse_case_date;

/// Generated map-search link column.
pub const MAP_LINK_COLUMN: &str = "Map_Link";
/// Generated serial-number column, always first.
pub const SERIAL_COLUMN: &str = "S.No";
/// Generated day-count column.
pub const DAYS_ON_ECMO_COLUMN: &str = "Days_on_ECMO";

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Adds a per-row map-search link built from hospital, city and state.
///
/// Requires all three address fields to resolve and a non-empty table;
/// otherwise the table is left untouched. The query is the trimmed non-empty
/// parts joined by single spaces, percent-encoded into the search URL. Rows
/// with no address text at all get an empty link rather than a bare URL.
/// If a link column already exists it is kept, not recomputed.
pub fn add_map_links(table: &mut NormalizedTable, fields: &FieldMap) -> Result<()> {
    if table.has_column(MAP_LINK_COLUMN) {
        return Ok(());
    }
    let (Some(hospital), Some(city), Some(state)) = (
        fields.column(CanonicalField::Hospital),
        fields.column(CanonicalField::City),
        fields.column(CanonicalField::State),
    ) else {
        debug!("map links skipped, address fields unresolved");
        return Ok(());
    };
    if table.is_empty() {
        return Ok(());
    }

    let mut links = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let mut query = String::new();
        for column in [hospital, city, state] {
            let part = table.value(row, column).unwrap_or("").trim();
            if part.is_empty() {
                continue;
            }
            if !query.is_empty() {
                query.push(' ');
            }
            query.push_str(part);
        }
        if query.is_empty() {
            links.push(String::new());
        } else {
            links.push(format!(
                "{MAP_SEARCH_URL}{}",
                utf8_percent_encode(&query, NON_ALPHANUMERIC)
            ));
        }
    }
    table.push_column(MAP_LINK_COLUMN, links)
}

/// Rebuilds the serial-number column: `"1"`..`"N"` in current row order,
/// inserted as the first column. Any previous serial column is discarded, so
/// numbering always reflects the table being built, never an earlier run.
pub fn add_serial_numbers(table: &mut NormalizedTable) -> Result<()> {
    if table.column_count() == 0 {
        return Ok(());
    }
    table.remove_column(SERIAL_COLUMN);
    let serials = (1..=table.row_count()).map(|n| n.to_string()).collect();
    table.insert_column(0, SERIAL_COLUMN, serials)
}

/// Adds the whole-day difference between each row's initiation date and
/// `today`. Rows whose date cell does not parse get an empty value; a future
/// date yields a negative count. Skipped when the timestamp field is
/// unresolved. The column is recomputed on every run since it depends on
/// `today`.
pub fn add_support_days(
    table: &mut NormalizedTable,
    fields: &FieldMap,
    today: NaiveDate,
) -> Result<()> {
    let Some(column) = fields.column(CanonicalField::Timestamp) else {
        debug!("day counts skipped, timestamp field unresolved");
        return Ok(());
    };
    if table.column_count() == 0 {
        return Ok(());
    }

    let mut days = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let value = table.value(row, column).unwrap_or("");
        let formatted = parse_case_date(value)
            .map(|date| today.signed_duration_since(date).num_days().to_string())
            .unwrap_or_default();
        days.push(formatted);
    }
    table.remove_column(DAYS_ON_ECMO_COLUMN);
    table.push_column(DAYS_ON_ECMO_COLUMN, days)
}
