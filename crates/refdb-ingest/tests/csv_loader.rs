use std::fs;

use refdb_ingest::{CsvLoader, IngestError, RowSource, dataset_name};
use tempfile::TempDir;

#[test]
fn loads_rows_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subdivisions.csv");
    fs::write(
        &path,
        "country,name,code\nCA,Ontario,CA-ON\nUS,\"New York, State\",US-NY\n",
    )
    .unwrap();

    let rows = CsvLoader.load(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("name"), Some("New York, State"));
    assert_eq!(rows[1].line(), 3);
    assert_eq!(dataset_name(&path), "subdivisions");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("channels.csv");
    let err = CsvLoader.load(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn ragged_row_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("languages.csv");
    fs::write(&path, "code,name\neng,English,extra\n").unwrap();
    let err = CsvLoader.load(&path).unwrap_err();
    assert!(matches!(err, IngestError::CsvParse { .. }));
    assert!(err.to_string().contains("languages.csv"));
}
