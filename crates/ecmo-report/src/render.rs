//! Terminal rendering for the case table, KPI strip, and breakdowns.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ecmo_model::{AggregateResult, NormalizedTable};
use ecmo_transform::{DAYS_ON_ECMO_COLUMN, SERIAL_COLUMN};

use crate::kpi::KpiSummary;

/// Builds the case table with one row per case in view order.
///
/// Blank cells render as a dimmed dash so sparse optional columns stay
/// scannable.
#[must_use]
pub fn render_case_table(view: &NormalizedTable) -> Table {
    let mut table = Table::new();
    let names: Vec<&str> = view.column_names().collect();
    table.set_header(names.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for (index, name) in names.iter().enumerate() {
        if *name == SERIAL_COLUMN || *name == DAYS_ON_ECMO_COLUMN {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in 0..view.row_count() {
        let cells: Vec<Cell> = names
            .iter()
            .map(|name| value_cell(view.value(row, name).unwrap_or("")))
            .collect();
        table.add_row(cells);
    }
    table
}

/// Builds a two-column breakdown table from an aggregation.
#[must_use]
pub fn render_aggregates(label: &str, result: &AggregateResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Cases")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in result.iter() {
        table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Builds the single-row KPI strip.
///
/// Unknowable figures (unresolved status column, no computable day counts)
/// show as a dimmed dash rather than a zero.
#[must_use]
pub fn render_kpis(kpis: &KpiSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total cases"),
        header_cell("Active"),
        header_cell("Median days"),
        header_cell("VV"),
        header_cell("VA"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(kpis.total_cases).add_attribute(Attribute::Bold),
        optional_cell(kpis.active_cases),
        optional_cell(kpis.median_days_on_ecmo),
        Cell::new(kpis.vv_cases),
        Cell::new(kpis.va_cases),
    ]);
    table
}

/// Applies the shared dashboard styling to a table.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
