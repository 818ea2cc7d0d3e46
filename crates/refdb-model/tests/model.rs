use refdb_model::{DatasetReport, ValidationError, ValidationReport, Violation};

fn dataset(name: &str, errors: Vec<ValidationError>) -> DatasetReport {
    DatasetReport {
        dataset: name.to_string(),
        path: format!("database/{name}.csv").into(),
        rows: 3,
        errors,
    }
}

#[test]
fn empty_report_passes() {
    let report = ValidationReport::new();
    assert!(report.passed());
    assert_eq!(report.error_count(), 0);
}

#[test]
fn report_counts_across_datasets() {
    let mut report = ValidationReport::new();
    report.push(dataset("categories", vec![]));
    report.push(dataset(
        "channels",
        vec![
            ValidationError::new(2, "\"id\" is required"),
            ValidationError::new(2, "\"name\" is required"),
        ],
    ));
    report.push(dataset(
        "regions",
        vec![ValidationError::new(7, "\"code\" is required")],
    ));

    assert!(!report.passed());
    assert_eq!(report.error_count(), 3);
    let lines: Vec<usize> = report.errors().map(|error| error.line).collect();
    assert_eq!(lines, vec![2, 2, 7]);
    assert!(!report.datasets[0].has_errors());
}

#[test]
fn violation_maps_to_line() {
    let violation = Violation::Required {
        field: "code".to_string(),
    };
    let error = ValidationError::from_violation(0, &violation);
    assert_eq!(error.line, 2);
    assert_eq!(error.message, "\"code\" is required");
}

#[test]
fn report_serializes() {
    let mut report = ValidationReport::new();
    report.push(dataset(
        "languages",
        vec![ValidationError::new(4, "\"code\" is required")],
    ));
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn violation_serializes_with_kind_tag() {
    let violation = Violation::Duplicate {
        field: "id".to_string(),
        value: "bbc.uk".to_string(),
    };
    let json = serde_json::to_value(&violation).expect("serialize violation");
    assert_eq!(json["kind"], "duplicate");
    assert_eq!(json["value"], "bbc.uk");
}
