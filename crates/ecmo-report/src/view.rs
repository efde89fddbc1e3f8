//! Column selection and row ordering for the case table.
//!
//! The view is a projection, not a rewrite: serial numbers keep the values
//! they were assigned before filtering, so gaps in `S.No` show which rows a
//! filter removed.

use std::cmp::Ordering;

use chrono::NaiveDate;
use ecmo_model::{CanonicalField, FieldMap, NormalizedTable};
use ecmo_transform::{DAYS_ON_ECMO_COLUMN, MAP_LINK_COLUMN, SERIAL_COLUMN, parse_case_date};

/// Canonical fields shown in the case table, in display order.
const DISPLAY_FIELDS: [CanonicalField; 7] = [
    CanonicalField::Timestamp,
    CanonicalField::Hospital,
    CanonicalField::City,
    CanonicalField::State,
    CanonicalField::EcmoType,
    CanonicalField::Diagnosis,
    CanonicalField::Status,
];

/// Columns to show for the current table, honouring what actually resolved.
///
/// The serial column leads, resolved registry fields follow in a fixed order,
/// and the derived columns trail. Fields the resolver could not place are
/// simply absent rather than rendered empty.
#[must_use]
pub fn display_columns(table: &NormalizedTable, fields: &FieldMap) -> Vec<String> {
    let mut names = Vec::new();
    if table.has_column(SERIAL_COLUMN) {
        names.push(SERIAL_COLUMN.to_string());
    }
    for field in DISPLAY_FIELDS {
        if let Some(column) = fields.column(field)
            && table.has_column(column)
        {
            names.push(column.to_string());
        }
    }
    if table.has_column(DAYS_ON_ECMO_COLUMN) {
        names.push(DAYS_ON_ECMO_COLUMN.to_string());
    }
    if table.has_column(MAP_LINK_COLUMN) {
        names.push(MAP_LINK_COLUMN.to_string());
    }
    names
}

/// Orders rows newest-first by initiation date and projects the display
/// columns.
///
/// Rows whose date cell does not parse sink to the bottom in their original
/// relative order; the sort is stable so same-day cases keep source order.
#[must_use]
pub fn display_view(table: &NormalizedTable, fields: &FieldMap) -> NormalizedTable {
    let order = date_descending_order(table, fields);
    let ordered = table.select_rows(&order);
    let columns = display_columns(&ordered, fields);
    ordered.select_columns(&columns)
}

fn date_descending_order(table: &NormalizedTable, fields: &FieldMap) -> Vec<usize> {
    let dates: Vec<Option<NaiveDate>> = match fields
        .column(CanonicalField::Timestamp)
        .and_then(|column| table.column(column))
    {
        Some(values) => values.iter().map(|value| parse_case_date(value)).collect(),
        None => return (0..table.row_count()).collect(),
    };

    let mut order: Vec<usize> = (0..table.row_count()).collect();
    order.sort_by(|&a, &b| match (dates.get(a), dates.get(b)) {
        (Some(Some(left)), Some(Some(right))) => right.cmp(left),
        (Some(Some(_)), _) => Ordering::Less,
        (_, Some(Some(_))) => Ordering::Greater,
        _ => Ordering::Equal,
    });
    order
}
