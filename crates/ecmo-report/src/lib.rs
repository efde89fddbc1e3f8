//! Reporting over a normalized case table: filtering, KPIs, value
//! breakdowns, and rendered or serialized dashboard views.

pub mod aggregate;
pub mod filter;
pub mod kpi;
pub mod payload;
pub mod render;
pub mod view;

pub use aggregate::{count_by, daily_counts};
pub use filter::apply_filters;
pub use kpi::{ACTIVE_STATUS, KpiSummary, kpi_summary};
pub use payload::{
    DailyCount, SNAPSHOT_SCHEMA, SNAPSHOT_SCHEMA_VERSION, SnapshotPayload, build_snapshot,
    write_snapshot_json,
};
pub use render::{apply_table_style, render_aggregates, render_case_table, render_kpis};
pub use view::{display_columns, display_view};
