use std::fs;
use std::io::Write;

use ecmo_ingest::{CsvFileSource, DataSource, IngestError};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn reads_headers_and_rows_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "cases.csv",
        "Hospital Name , State,Comments,Comments\nApollo, MH ,stable,\nFortis,KA,,weaning\n",
    );

    let table = CsvFileSource::new(path).fetch().unwrap();
    // Header and cell text is untouched, including padding and duplicates.
    assert_eq!(
        table.headers,
        ["Hospital Name ", " State", "Comments", "Comments"]
    );
    assert_eq!(table.rows[0], ["Apollo", " MH ", "stable", ""]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn strips_byte_order_mark_from_first_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "bom.csv", "\u{feff}Hospital,State\nApollo,MH\n");

    let table = CsvFileSource::new(path).fetch().unwrap();
    assert_eq!(table.headers, ["Hospital", "State"]);
}

#[test]
fn skips_fully_blank_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "blanks.csv",
        "\n  ,  \nHospital,State\nApollo,MH\n,\nFortis,KA\n",
    );

    let table = CsvFileSource::new(path).fetch().unwrap();
    // Blank records are dropped even ahead of the header row.
    assert_eq!(table.headers, ["Hospital", "State"]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn keeps_ragged_rows_unsquared() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "ragged.csv",
        "Hospital,State,Status\nApollo\nFortis,KA,Active,extra\n",
    );

    let table = CsvFileSource::new(path).fetch().unwrap();
    assert_eq!(table.width(), 3);
    assert_eq!(table.rows[0], ["Apollo"]);
    assert_eq!(table.rows[1], ["Fortis", "KA", "Active", "extra"]);
}

#[test]
fn header_only_file_is_empty_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "header_only.csv", "Hospital,State\n");

    let table = CsvFileSource::new(path).fetch().unwrap();
    assert!(table.is_empty());
    assert_eq!(table.width(), 2);
}

#[test]
fn custom_delimiter_splits_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "semicolon.csv",
        "Hospital;State\nApollo, Main Branch;MH\n",
    );

    let table = CsvFileSource::new(path)
        .with_delimiter(b';')
        .fetch()
        .unwrap();
    assert_eq!(table.headers, ["Hospital", "State"]);
    assert_eq!(table.rows[0], ["Apollo, Main Branch", "MH"]);
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.csv");

    let err = CsvFileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, IngestError::SourceNotFound { .. }));
    assert_eq!(err.path(), &path);
}
