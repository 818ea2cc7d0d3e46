//! End-to-end tests for the validation orchestrator.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use refdb_ingest::{CsvLoader, IngestError, RowSource, read_rows};
use refdb_model::Row;
use refdb_schema::{SchemaError, SchemaRegistry};
use refdb_validate::{ValidateError, Validator};
use tempfile::TempDir;

const CHANNELS_HEADER: &str = "id,name,native_name,network,country,subdivision,city,broadcast_area,languages,categories,is_nsfw,launched,closed,replaced_by,website,logo";

/// In-memory CSV files keyed by path; records every load.
#[derive(Default)]
struct MemorySource {
    files: HashMap<PathBuf, String>,
    loaded: RefCell<Vec<PathBuf>>,
}

impl MemorySource {
    fn with(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_string());
        self
    }
}

impl RowSource for MemorySource {
    fn load(&self, path: &Path) -> refdb_ingest::Result<Vec<Row>> {
        self.loaded.borrow_mut().push(path.to_path_buf());
        let contents = self
            .files
            .get(path)
            .ok_or_else(|| IngestError::FileNotFound {
                path: path.to_path_buf(),
            })?;
        read_rows(contents.as_bytes(), path)
    }
}

fn registry() -> SchemaRegistry {
    SchemaRegistry::builtin().expect("built-in schemas")
}

fn channel(id: &str) -> String {
    format!("{id},BBC One,,BBC,UK,,London,c/UK,eng,general,FALSE,1936-11-02,,,https://www.bbc.co.uk,https://example.com/bbc.png")
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

#[test]
fn valid_datasets_pass() {
    let source = MemorySource::default()
        .with("database/languages.csv", "code,name\neng,English\nfra,French\n")
        .with(
            "database/subdivisions.csv",
            "country,name,code\nCA,Ontario,CA-ON\n",
        );
    let registry = registry();
    let report = Validator::new(&registry)
        .run(
            &paths(&["database/languages.csv", "database/subdivisions.csv"]),
            &source,
        )
        .unwrap();

    assert!(report.passed());
    assert_eq!(report.datasets.len(), 2);
    assert_eq!(report.datasets[0].dataset, "languages");
    assert_eq!(report.datasets[0].rows, 2);
}

#[test]
fn duplicate_channel_id_is_reported_once_on_later_line() {
    let csv = format!(
        "{CHANNELS_HEADER}\n{}\n{}\n",
        channel("BBC.uk"),
        channel("bbc.uk")
    );
    let source = MemorySource::default().with("database/channels.csv", &csv);
    let registry = registry();
    let report = Validator::new(&registry)
        .run(&paths(&["database/channels.csv"]), &source)
        .unwrap();

    let errors = &report.datasets[0].errors;
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(errors[0].line, 3);
    assert_eq!(errors[0].message, "Entry with the id \"bbc.uk\" already exists");
    assert!(!report.passed());
}

#[test]
fn bare_ids_differing_only_in_case_give_one_error() {
    let csv = format!("{CHANNELS_HEADER}\n{}\n{}\n", channel("BBC"), channel("bbc"));
    let source = MemorySource::default().with("database/channels.csv", &csv);
    let registry = registry();
    let report = Validator::new(&registry)
        .run(&paths(&["database/channels.csv"]), &source)
        .unwrap();

    let listing: Vec<String> = report
        .errors()
        .map(|error| format!("{} {}", error.line, error.message))
        .collect();
    assert_eq!(listing, vec!["3 Entry with the id \"bbc\" already exists"]);
}

#[test]
fn row_errors_carry_line_numbers() {
    let csv = "country,name,code\nCA,Ontario,CA-ON\nca,,CA-ON\nUS,New York,NY\n";
    let source = MemorySource::default().with("database/subdivisions.csv", csv);
    let registry = registry();
    let report = Validator::new(&registry)
        .run(&paths(&["database/subdivisions.csv"]), &source)
        .unwrap();

    let listing = report
        .errors()
        .map(|error| format!("{} {}", error.line, error.message))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(listing, @r#"
    3 "country" with value "ca" fails to match the required pattern: /^[A-Z]{2}$/
    3 "name" is required
    4 "code" with value "NY" fails to match the required pattern: /^[A-Z]{2}-[A-Z0-9]{1,3}$/
    "#);
}

#[test]
fn uniqueness_errors_precede_row_errors() {
    let mut bad = channel("bbc.uk");
    bad = bad.replacen(",FALSE,", ",no,", 1);
    let csv = format!("{CHANNELS_HEADER}\n{}\n{bad}\n", channel("BBC.uk"));
    let source = MemorySource::default().with("database/channels.csv", &csv);
    let registry = registry();
    let report = Validator::new(&registry)
        .run(&paths(&["database/channels.csv"]), &source)
        .unwrap();

    let messages: Vec<&str> = report
        .errors()
        .map(|error| error.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Entry with the id \"bbc.uk\" already exists",
            "\"is_nsfw\" must be a boolean",
        ]
    );
}

#[test]
fn unknown_dataset_aborts_before_later_files() {
    let source = MemorySource::default()
        .with("database/foo.csv", "id\n1\n")
        .with("database/languages.csv", "code,name\nENG,English\n");
    let registry = registry();
    let err = Validator::new(&registry)
        .run(
            &paths(&["database/foo.csv", "database/languages.csv"]),
            &source,
        )
        .unwrap_err();

    assert!(err.is_config_error());
    assert!(matches!(
        err,
        ValidateError::Schema(SchemaError::UnknownDataset { ref name }) if name == "foo"
    ));
    assert!(source.loaded.borrow().is_empty());
}

#[test]
fn non_csv_inputs_are_skipped() {
    let source = MemorySource::default().with("database/languages.csv", "code,name\neng,English\n");
    let registry = registry();
    let report = Validator::new(&registry)
        .run(
            &paths(&["README.md", "database/foo.json", "database/languages.csv"]),
            &source,
        )
        .unwrap();

    assert_eq!(report.datasets.len(), 1);
    assert_eq!(
        *source.loaded.borrow(),
        vec![PathBuf::from("database/languages.csv")]
    );
}

#[test]
fn load_failure_is_fatal() {
    let source = MemorySource::default();
    let registry = registry();
    let err = Validator::new(&registry)
        .run(&paths(&["database/regions.csv"]), &source)
        .unwrap_err();
    assert!(!err.is_config_error());
    assert!(matches!(err, ValidateError::Ingest(IngestError::FileNotFound { .. })));
}

#[test]
fn repeated_runs_are_identical() {
    let csv = "code,name,countries\nEUR,Europe,FR;DE;xx\nEUR2,,\n";
    let source = MemorySource::default().with("database/regions.csv", csv);
    let registry = registry();
    let validator = Validator::new(&registry);
    let input = paths(&["database/regions.csv"]);

    let first = validator.run(&input, &source).unwrap();
    let second = validator.run(&input, &source).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.error_count(), 3);
}

#[test]
fn validate_dataset_uses_registry() {
    let registry = registry();
    let validator = Validator::new(&registry);
    let rows = vec![Row::new(0, [("id", "news"), ("name", "News")])];
    assert!(validator.validate_dataset("categories", &rows).unwrap().is_empty());
    assert!(validator.validate_dataset("streams", &rows).is_err());
}

#[test]
fn default_datasets_from_disk() {
    let dir = TempDir::new().unwrap();
    let files = [
        ("categories.csv", "id,name\nnews,News\n".to_string()),
        (
            "channels.csv",
            format!("{CHANNELS_HEADER}\n{}\n", channel("BBCOne.uk")),
        ),
        (
            "countries.csv",
            "name,code,languages,flag\nCanada,CA,eng;fra,🇨🇦\n".to_string(),
        ),
        ("languages.csv", "code,name\neng,English\n".to_string()),
        ("regions.csv", "code,name,countries\nNORAM,North America,CA;US\n".to_string()),
        ("subdivisions.csv", "country,name,code\nCA,Ontario,CA-ON\n".to_string()),
        ("notes.txt", "not a dataset".to_string()),
    ];
    for (name, contents) in &files {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    let registry = registry();
    let report = Validator::new(&registry)
        .run_defaults(dir.path(), &CsvLoader)
        .unwrap();

    let names: Vec<&str> = report.datasets.iter().map(|d| d.dataset.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "categories",
            "channels",
            "countries",
            "languages",
            "regions",
            "subdivisions"
        ]
    );
    assert!(report.passed(), "{:?}", report.errors().collect::<Vec<_>>());
}
