//! Filter, view, and KPI behaviour over one realistic registry table.

use ecmo_map::build_field_map;
use ecmo_model::{CanonicalField, FilterSpec, NormalizedTable, Selection};
use ecmo_report::{apply_filters, count_by, daily_counts, display_view, kpi_summary};

fn registry_table() -> NormalizedTable {
    NormalizedTable::from_columns([
        (
            "S.No",
            vec![
                "1".to_string(),
                "2".to_string(),
                "3".to_string(),
                "4".to_string(),
            ],
        ),
        (
            "Initiation_Date",
            vec![
                "2024-04-01".to_string(),
                "2024-04-20".to_string(),
                "2024-04-10".to_string(),
                "awaiting entry".to_string(),
            ],
        ),
        (
            "Hospital",
            vec![
                "Alpha".to_string(),
                "Beta".to_string(),
                "Gamma".to_string(),
                "Delta".to_string(),
            ],
        ),
        (
            "Location_State",
            vec![
                "MH".to_string(),
                "KA".to_string(),
                "KA".to_string(),
                "KA".to_string(),
            ],
        ),
        (
            "ECMO_Type",
            vec![
                "VA".to_string(),
                "VV".to_string(),
                "VV".to_string(),
                "VA".to_string(),
            ],
        ),
        (
            "Status",
            vec![
                "Active".to_string(),
                "Active".to_string(),
                "Discharged".to_string(),
                "Expired".to_string(),
            ],
        ),
        (
            "Days_on_ECMO",
            vec![
                "12".to_string(),
                "3".to_string(),
                "8".to_string(),
                String::new(),
            ],
        ),
    ])
    .unwrap()
}

#[test]
fn filtered_view_orders_by_date_and_keeps_serials() {
    let table = registry_table();
    let headers: Vec<String> = table.column_names().map(str::to_string).collect();
    let fields = build_field_map(&headers);
    let spec =
        FilterSpec::new().with(CanonicalField::State, Selection::Equals("KA".to_string()));

    let filtered = apply_filters(&table, &fields, &spec);
    assert_eq!(filtered.row_count(), 3);

    let view = display_view(&filtered, &fields);
    assert_eq!(view.column("Hospital").unwrap(), &["Beta", "Gamma", "Delta"]);
    assert_eq!(view.column("S.No").unwrap(), &["2", "3", "4"]);
}

#[test]
fn kpis_and_aggregates_follow_the_filtered_subset() {
    let table = registry_table();
    let headers: Vec<String> = table.column_names().map(str::to_string).collect();
    let fields = build_field_map(&headers);
    let spec =
        FilterSpec::new().with(CanonicalField::State, Selection::Equals("KA".to_string()));

    let filtered = apply_filters(&table, &fields, &spec);
    let kpis = kpi_summary(&filtered, &fields);
    assert_eq!(kpis.total_cases, 3);
    assert_eq!(kpis.active_cases, Some(1));
    assert_eq!(kpis.vv_cases, 2);
    assert_eq!(kpis.va_cases, 1);
    // Day counts 3 and 8 survive the filter; the blank cell does not parse.
    assert_eq!(kpis.median_days_on_ecmo, Some(5));

    let by_state = count_by(&filtered, fields.column(CanonicalField::State));
    assert_eq!(by_state.count_for("KA"), 3);
    assert_eq!(by_state.count_for("MH"), 0);

    let daily = daily_counts(&filtered, fields.column(CanonicalField::Timestamp));
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].1, 1);
}

#[test]
fn selecting_the_sentinel_keeps_every_row() {
    let table = registry_table();
    let headers: Vec<String> = table.column_names().map(str::to_string).collect();
    let fields = build_field_map(&headers);
    let spec = FilterSpec::new().with(
        CanonicalField::State,
        Selection::from_choice(ecmo_model::NO_CONSTRAINT),
    );

    let filtered = apply_filters(&table, &fields, &spec);
    assert_eq!(filtered.row_count(), 4);
}
