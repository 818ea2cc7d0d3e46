//! Rendering tests for validation reports.

use refdb_cli::render::{render_json, render_schemas, render_tables, render_text};
use refdb_model::{DatasetReport, ValidationError, ValidationReport};
use refdb_schema::SchemaRegistry;

fn dataset(name: &str, rows: usize, errors: Vec<ValidationError>) -> DatasetReport {
    DatasetReport {
        dataset: name.to_string(),
        path: format!("database/{name}.csv").into(),
        rows,
        errors,
    }
}

fn failing_report() -> ValidationReport {
    let mut report = ValidationReport::new();
    report.push(dataset("categories", 28, vec![]));
    report.push(dataset(
        "channels",
        3,
        vec![
            ValidationError::new(3, "Entry with the id \"bbc.uk\" already exists"),
            ValidationError::new(4, "\"is_nsfw\" must be a boolean"),
        ],
    ));
    report.push(dataset(
        "subdivisions",
        1200,
        vec![ValidationError::new(1024, "\"name\" is required")],
    ));
    report
}

#[test]
fn text_lists_failing_files_only() {
    let rendered = render_text(&failing_report());
    insta::assert_snapshot!(rendered.trim(), @r#"
    database/channels.csv
     3      Entry with the id "bbc.uk" already exists
     4      "is_nsfw" must be a boolean

    database/subdivisions.csv
     1024   "name" is required

    3 error(s)
    "#);
}

#[test]
fn text_for_clean_report_is_empty() {
    let mut report = ValidationReport::new();
    report.push(dataset("languages", 10, vec![]));
    assert_eq!(render_text(&report), "");
}

#[test]
fn text_starts_each_file_with_blank_line() {
    let rendered = render_text(&failing_report());
    assert!(rendered.starts_with("\ndatabase/channels.csv\n"));
    assert!(rendered.ends_with("\n3 error(s)\n"));
}

#[test]
fn json_round_trips_report() {
    let report = failing_report();
    let json = render_json(&report).unwrap();
    let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn tables_include_totals_and_errors() {
    let rendered = render_tables(&failing_report());
    assert!(rendered.contains("TOTAL"));
    assert!(rendered.contains("1231"));
    assert!(rendered.contains("Errors:"));
    assert!(rendered.contains("\"name\" is required"));
}

#[test]
fn tables_skip_error_section_when_clean() {
    let mut report = ValidationReport::new();
    report.push(dataset("languages", 10, vec![]));
    assert!(!render_tables(&report).contains("Errors:"));
}

#[test]
fn schema_table_lists_every_dataset() {
    let registry = SchemaRegistry::builtin().unwrap();
    let rendered = render_schemas(&registry);
    for name in registry.names() {
        assert!(rendered.contains(name), "{name}");
    }
    assert!(rendered.contains("unique"));
}
