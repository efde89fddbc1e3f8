use chrono::NaiveDate;
use ecmo_map::build_field_map;
use ecmo_model::{CanonicalField, RawTable};
use ecmo_transform::{
    DAYS_ON_ECMO_COLUMN, MAP_LINK_COLUMN, SERIAL_COLUMN, add_map_links, add_serial_numbers,
    add_support_days, build_table, coalesce_all,
};
use percent_encoding::percent_decode_str;

fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|cell| (*cell).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    )
}

#[test]
fn full_normalization_of_a_messy_export() {
    let raw = raw(
        &[
            " Hospital ",
            "Location_City",
            "Location_State",
            "Initiation_Date",
            "Comments",
            "Comments",
            "",
        ],
        &[
            &[
                "City Hospital",
                "Pune",
                "MH",
                "2024-05-01",
                "",
                " improving ",
                "x",
            ],
            &["Apollo", "Chennai", "TN", "30/04/2024", "stable", "", ""],
        ],
    );

    let mut table = build_table(&raw).unwrap();
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        [
            "Hospital",
            "Location_City",
            "Location_State",
            "Initiation_Date",
            "Comments",
            "Comments (2)",
            "Column_7",
        ]
    );

    coalesce_all(&mut table).unwrap();
    assert_eq!(table.column("Comments").unwrap(), [" improving ", "stable"]);

    let headers: Vec<String> = table.column_names().map(str::to_string).collect();
    let fields = build_field_map(&headers);
    assert_eq!(fields.column(CanonicalField::Comments), Some("Comments"));

    let today = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();
    add_map_links(&mut table, &fields).unwrap();
    add_support_days(&mut table, &fields, today).unwrap();
    add_serial_numbers(&mut table).unwrap();

    assert_eq!(table.position(SERIAL_COLUMN), Some(0));
    assert_eq!(table.column(SERIAL_COLUMN).unwrap(), ["1", "2"]);
    assert_eq!(table.column(DAYS_ON_ECMO_COLUMN).unwrap(), ["10", "11"]);

    let link = table.value(0, MAP_LINK_COLUMN).unwrap();
    let (_, encoded) = link.split_once("query=").unwrap();
    let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
    assert_eq!(decoded, "City Hospital Pune MH");
}

#[test]
fn empty_source_flows_through_without_derivations() {
    let mut table = build_table(&RawTable::default()).unwrap();
    let fields = build_field_map(&[]);
    let today = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

    add_map_links(&mut table, &fields).unwrap();
    add_support_days(&mut table, &fields, today).unwrap();
    add_serial_numbers(&mut table).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.column_count(), 0);
}

#[test]
fn header_only_source_keeps_headers_and_gains_empty_derivations() {
    let raw = raw(
        &["Hospital", "Location_City", "Location_State", "Initiation_Date"],
        &[],
    );
    let mut table = build_table(&raw).unwrap();
    let headers: Vec<String> = table.column_names().map(str::to_string).collect();
    let fields = build_field_map(&headers);
    let today = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

    add_map_links(&mut table, &fields).unwrap();
    add_support_days(&mut table, &fields, today).unwrap();
    add_serial_numbers(&mut table).unwrap();

    // No rows, but the shape is coherent for display.
    assert_eq!(table.row_count(), 0);
    assert!(table.has_column(SERIAL_COLUMN));
    assert!(table.has_column(DAYS_ON_ECMO_COLUMN));
    assert!(!table.has_column(MAP_LINK_COLUMN));
}
