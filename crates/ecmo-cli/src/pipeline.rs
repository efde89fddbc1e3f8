//! One dashboard refresh, staged end to end.
//!
//! Every cycle rebuilds the table wholesale: fetch the raw export,
//! normalize it, resolve canonical fields, derive display columns, filter,
//! then summarize. Nothing is carried over from the previous cycle; watch
//! mode's cache of the last good outcome lives in the command loop, not
//! here.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, info_span};

use ecmo_ingest::DataSource;
use ecmo_map::build_field_map;
use ecmo_model::{AggregateResult, CanonicalField, FieldMap, FilterSpec, NormalizedTable};
use ecmo_report::{
    KpiSummary, apply_filters, count_by, daily_counts, display_view, kpi_summary,
};
use ecmo_transform::{
    add_map_links, add_serial_numbers, add_support_days, build_table, coalesce_all,
};

/// Everything one refresh produced, ready for rendering and export.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Source description for provenance lines and payloads.
    pub source: String,
    /// Rows in the source before filtering.
    pub source_rows: usize,
    pub fields: FieldMap,
    /// Filtered table with every column, for aggregation.
    pub filtered: NormalizedTable,
    /// Display projection of the filtered table, newest case first.
    pub view: NormalizedTable,
    pub kpis: KpiSummary,
    pub by_state: AggregateResult,
    pub by_type: AggregateResult,
    pub daily: Vec<(NaiveDate, usize)>,
}

/// Runs one full refresh against a source.
///
/// `today` anchors the day-count derivation so callers (and tests) control
/// the clock. Fetching is the only step that can fail; a source problem
/// aborts the cycle without producing a partial table.
pub fn refresh(
    source: &dyn DataSource,
    filters: &FilterSpec,
    today: NaiveDate,
) -> Result<RefreshOutcome> {
    let described = source.describe();
    let refresh_span = info_span!("refresh", source = %described);
    let _refresh_guard = refresh_span.enter();
    let refresh_start = Instant::now();

    let raw = info_span!("fetch").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let raw = source
            .fetch()
            .with_context(|| format!("fetch {described}"))?;
        debug!(
            rows = raw.row_count(),
            columns = raw.width(),
            duration_ms = start.elapsed().as_millis(),
            "fetch complete"
        );
        Ok(raw)
    })?;

    let mut table = info_span!("normalize").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let mut table = build_table(&raw).context("normalize table")?;
        coalesce_all(&mut table).context("coalesce duplicate columns")?;
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        Ok(table)
    })?;

    let fields = info_span!("resolve").in_scope(|| {
        let headers: Vec<String> = table.column_names().map(str::to_string).collect();
        let fields = build_field_map(&headers);
        debug!(
            resolved = fields.resolved_count(),
            fields = CanonicalField::ALL.len(),
            "resolve complete"
        );
        fields
    });

    info_span!("derive").in_scope(|| -> Result<()> {
        let start = Instant::now();
        add_map_links(&mut table, &fields).context("derive map links")?;
        add_support_days(&mut table, &fields, today).context("derive day counts")?;
        add_serial_numbers(&mut table).context("derive serial numbers")?;
        debug!(
            columns = table.column_count(),
            duration_ms = start.elapsed().as_millis(),
            "derive complete"
        );
        Ok(())
    })?;

    let source_rows = table.row_count();
    let filtered = apply_filters(&table, &fields, filters);
    let view = display_view(&filtered, &fields);
    let kpis = kpi_summary(&filtered, &fields);
    let by_state = count_by(&filtered, fields.column(CanonicalField::State));
    let by_type = count_by(&filtered, fields.column(CanonicalField::EcmoType));
    let daily = daily_counts(&filtered, fields.column(CanonicalField::Timestamp));

    info!(
        source_rows,
        view_rows = view.row_count(),
        resolved_fields = fields.resolved_count(),
        duration_ms = refresh_start.elapsed().as_millis(),
        "refresh complete"
    );

    Ok(RefreshOutcome {
        source: described,
        source_rows,
        fields,
        filtered,
        view,
        kpis,
        by_state,
        by_type,
        daily,
    })
}
