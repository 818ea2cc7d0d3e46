//! Validation orchestrator.
//!
//! Resolves each input file to a dataset schema, loads its rows through a
//! [`RowSource`], and collects uniqueness and row errors into a
//! [`ValidationReport`]. Data errors are always collected in full; a missing
//! schema or an unreadable file stops the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use refdb_ingest::{RowSource, dataset_name, dataset_paths, is_csv};
use refdb_model::{DatasetReport, Row, ValidationError, ValidationReport};
use refdb_schema::{DEFAULT_DATASETS, Schema, SchemaRegistry};
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::row::validate_row;
use crate::unique::find_duplicates;

/// Validate `rows` against `schema`.
///
/// Uniqueness errors come first, then row errors in row order. Each error's
/// line is the row index plus two (header line, 1-based numbering).
pub fn validate_rows(schema: &Schema, rows: &[Row]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(key) = schema.unique_key() {
        for (index, violation) in find_duplicates(rows, key) {
            errors.push(ValidationError::from_violation(index, &violation));
        }
    }

    for row in rows {
        for violation in validate_row(schema, row) {
            debug!(line = row.line(), field = violation.field(), "field violation");
            errors.push(ValidationError::from_violation(row.index(), &violation));
        }
    }

    errors
}

/// Runs validation for a set of dataset files against a schema registry.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validate already-loaded rows of a named dataset.
    ///
    /// # Errors
    ///
    /// Returns a schema error if `dataset` is not registered.
    pub fn validate_dataset(&self, dataset: &str, rows: &[Row]) -> Result<Vec<ValidationError>> {
        let schema = self.registry.lookup(dataset)?;
        Ok(validate_rows(schema, rows))
    }

    /// Validate every CSV file in `paths`, in order.
    ///
    /// Paths without a `.csv` suffix are skipped and do not appear in the
    /// report.
    ///
    /// # Errors
    ///
    /// Stops at the first file whose dataset has no schema or that cannot be
    /// loaded. No partial report is returned.
    pub fn run<S>(&self, paths: &[PathBuf], source: &S) -> Result<ValidationReport>
    where
        S: RowSource + ?Sized,
    {
        let mut report = ValidationReport::new();
        for path in paths {
            if !is_csv(path) {
                warn!(path = %path.display(), "skipping non-CSV input");
                continue;
            }
            report.push(self.run_file(path, source)?);
        }
        info!(
            datasets = report.datasets.len(),
            errors = report.error_count(),
            "validation complete"
        );
        Ok(report)
    }

    /// Validate the default dataset files found under `dir`.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::run`].
    pub fn run_defaults<S>(&self, dir: &Path, source: &S) -> Result<ValidationReport>
    where
        S: RowSource + ?Sized,
    {
        self.run(&dataset_paths(dir, DEFAULT_DATASETS), source)
    }

    fn run_file<S>(&self, path: &Path, source: &S) -> Result<DatasetReport>
    where
        S: RowSource + ?Sized,
    {
        let dataset = dataset_name(path);
        let span = info_span!("dataset", dataset = %dataset, path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();

        let schema = self.registry.lookup(&dataset)?;
        let rows = source.load(path)?;

        let mut dataset_report = DatasetReport::new(&dataset, path);
        dataset_report.rows = rows.len();
        dataset_report.errors = validate_rows(schema, &rows);

        info!(
            rows = dataset_report.rows,
            errors = dataset_report.error_count(),
            duration_ms = start.elapsed().as_millis(),
            "dataset validated"
        );
        Ok(dataset_report)
    }
}
