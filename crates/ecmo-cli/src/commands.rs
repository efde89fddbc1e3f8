//! Subcommand implementations for the dashboard CLI.

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, warn};

use ecmo_ingest::{CsvFileSource, DataSource};
use ecmo_map::build_field_map;
use ecmo_model::{CanonicalField, FilterSpec, Selection};
use ecmo_report::{
    apply_table_style, build_snapshot, render_aggregates, render_case_table, render_kpis,
    write_snapshot_json,
};
use ecmo_transform::{build_table, coalesce_all};

use crate::cli::{FilterArgs, ShowArgs, SourceArgs, WatchArgs};
use crate::pipeline::{RefreshOutcome, refresh};

/// Renders the dashboard once, optionally writing the JSON snapshot.
pub fn run_show(args: &ShowArgs) -> Result<()> {
    let source = build_source(&args.source)?;
    let filters = filter_spec(&args.filters);
    let outcome = refresh(&source, &filters, Local::now().date_naive())?;
    print_dashboard(&outcome, args.max_rows);
    if let Some(path) = &args.json {
        write_snapshot(path, &outcome, &filters)?;
    }
    Ok(())
}

/// Re-renders the dashboard on a fixed interval.
///
/// A cycle that cannot reach the source keeps the last good view on screen
/// and logs the failure; the loop never exits over a transient source
/// problem. `--cycles` bounds the loop for scripted runs.
pub fn run_watch(args: &WatchArgs) -> Result<()> {
    let source = build_source(&args.show.source)?;
    let filters = filter_spec(&args.show.filters);
    let interval = Duration::from_secs(args.refresh_seconds.max(1));
    info!(
        refresh_seconds = args.refresh_seconds,
        cycles = args.cycles,
        "watch started"
    );
    let mut last_good: Option<RefreshOutcome> = None;
    let mut cycle: u64 = 0;
    loop {
        match refresh(&source, &filters, Local::now().date_naive()) {
            Ok(outcome) => {
                println!();
                println!("Refreshed: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
                print_dashboard(&outcome, args.show.max_rows);
                if let Some(path) = &args.show.json
                    && let Err(error) = write_snapshot(path, &outcome, &filters)
                {
                    warn!("snapshot write failed: {error:#}");
                }
                last_good = Some(outcome);
            }
            Err(error) => {
                warn!(cycle, "refresh failed: {error:#}");
                if let Some(outcome) = &last_good {
                    println!();
                    println!("Source unavailable; showing the last good view.");
                    print_dashboard(outcome, args.show.max_rows);
                } else {
                    eprintln!("error: {error:#}");
                }
            }
        }
        cycle += 1;
        if let Some(limit) = args.cycles
            && cycle >= limit
        {
            break;
        }
        thread::sleep(interval);
    }
    Ok(())
}

/// Prints how each canonical field resolved against the source columns.
pub fn run_fields(args: &SourceArgs) -> Result<()> {
    let source = build_source(args)?;
    let raw = source.fetch().context("fetch case-report export")?;
    let mut table = build_table(&raw).context("normalize table")?;
    coalesce_all(&mut table).context("coalesce duplicate columns")?;
    let headers: Vec<String> = table.column_names().map(str::to_string).collect();
    let fields = build_field_map(&headers);
    let mut out = Table::new();
    out.set_header(vec!["Field", "Column"]);
    apply_table_style(&mut out);
    for field in CanonicalField::ALL {
        let column = fields.column(field).unwrap_or("(unresolved)");
        out.add_row(vec![field.label().to_string(), column.to_string()]);
    }
    println!("{out}");
    Ok(())
}

fn build_source(args: &SourceArgs) -> Result<CsvFileSource> {
    let delimiter = u8::try_from(args.delimiter)
        .map_err(|_| anyhow!("delimiter {:?} does not fit in one byte", args.delimiter))?;
    Ok(CsvFileSource::new(&args.csv_path).with_delimiter(delimiter))
}

fn filter_spec(args: &FilterArgs) -> FilterSpec {
    FilterSpec::new()
        .with(CanonicalField::State, Selection::from_choice(&args.state))
        .with(CanonicalField::City, Selection::from_choice(&args.city))
        .with(
            CanonicalField::Hospital,
            Selection::from_choice(&args.hospital),
        )
        .with(
            CanonicalField::EcmoType,
            Selection::from_choice(&args.ecmo_type),
        )
        .with(CanonicalField::Status, Selection::from_choice(&args.status))
}

/// Prints the KPI strip, the case table, and the non-empty breakdowns.
///
/// `max_rows` caps only the rendered case table; aggregates and any JSON
/// snapshot still cover the whole filtered view.
fn print_dashboard(outcome: &RefreshOutcome, max_rows: Option<usize>) {
    println!("Source: {}", outcome.source);
    println!("{}", render_kpis(&outcome.kpis));
    if outcome.view.row_count() == 0 {
        println!("No cases match the current filters.");
    } else {
        match max_rows {
            Some(max) if max < outcome.view.row_count() => {
                let order: Vec<usize> = (0..max).collect();
                println!("{}", render_case_table(&outcome.view.select_rows(&order)));
                println!("Showing {max} of {} cases.", outcome.view.row_count());
            }
            _ => println!("{}", render_case_table(&outcome.view)),
        }
    }
    if !outcome.by_state.is_empty() {
        println!("{}", render_aggregates("State", &outcome.by_state));
    }
    if !outcome.by_type.is_empty() {
        println!("{}", render_aggregates("ECMO type", &outcome.by_type));
    }
}

fn write_snapshot(path: &Path, outcome: &RefreshOutcome, filters: &FilterSpec) -> Result<()> {
    let payload = build_snapshot(
        &outcome.source,
        &outcome.view,
        &outcome.fields,
        filters,
        outcome.kpis.clone(),
        outcome.by_state.clone(),
        outcome.by_type.clone(),
        &outcome.daily,
    );
    write_snapshot_json(path, &payload)?;
    info!(path = %path.display(), rows = payload.row_count, "snapshot written");
    Ok(())
}
