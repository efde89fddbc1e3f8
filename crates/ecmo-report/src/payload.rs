//! Machine-readable snapshot of a rendered dashboard view.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use ecmo_model::{AggregateResult, FieldMap, FilterSpec, NormalizedTable};

use crate::kpi::KpiSummary;

pub const SNAPSHOT_SCHEMA: &str = "ecmo-registry.dashboard-snapshot";
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Cases initiated on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub count: usize,
}

/// Everything a downstream consumer needs to re-render one dashboard view.
///
/// Rows are the already filtered and ordered display view, not the raw
/// source, so the payload matches what the terminal showed.
#[derive(Debug, Serialize)]
pub struct SnapshotPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub row_count: usize,
    pub fields: FieldMap,
    pub filters: FilterSpec,
    pub kpis: KpiSummary,
    pub by_state: AggregateResult,
    pub by_type: AggregateResult,
    pub daily_initiations: Vec<DailyCount>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Assembles the snapshot from pieces the pipeline already computed.
#[must_use]
pub fn build_snapshot(
    source: &str,
    view: &NormalizedTable,
    fields: &FieldMap,
    filters: &FilterSpec,
    kpis: KpiSummary,
    by_state: AggregateResult,
    by_type: AggregateResult,
    daily: &[(NaiveDate, usize)],
) -> SnapshotPayload {
    let columns: Vec<String> = view.column_names().map(str::to_string).collect();
    let rows: Vec<Vec<String>> = (0..view.row_count())
        .filter_map(|index| view.row(index))
        .map(|row| row.into_iter().map(str::to_string).collect())
        .collect();
    SnapshotPayload {
        schema: SNAPSHOT_SCHEMA,
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        row_count: view.row_count(),
        fields: fields.clone(),
        filters: filters.clone(),
        kpis,
        by_state,
        by_type,
        daily_initiations: daily
            .iter()
            .map(|(date, count)| DailyCount {
                date: date.to_string(),
                count: *count,
            })
            .collect(),
        columns,
        rows,
    }
}

/// Writes the snapshot as pretty-printed JSON, creating parent directories
/// as needed.
pub fn write_snapshot_json(path: &Path, payload: &SnapshotPayload) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
