use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::row::line_for_index;
use crate::violation::Violation;

/// A data error localized to a line of the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based line, always >= 2 (line 1 is the header).
    pub line: usize,
    pub message: String,
}

impl ValidationError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// Attribute a violation to the data row at `index`.
    pub fn from_violation(index: usize, violation: &Violation) -> Self {
        Self::new(line_for_index(index), violation.to_string())
    }
}

/// Outcome for one dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReport {
    pub dataset: String,
    pub path: PathBuf,
    /// Rows validated.
    pub rows: usize,
    pub errors: Vec<ValidationError>,
}

impl DatasetReport {
    pub fn new(dataset: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            path: path.into(),
            rows: 0,
            errors: Vec::new(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Aggregated outcome of one validation run, datasets in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub datasets: Vec<DatasetReport>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dataset: DatasetReport) {
        self.datasets.push(dataset);
    }

    pub fn error_count(&self) -> usize {
        self.datasets.iter().map(DatasetReport::error_count).sum()
    }

    /// Flat view over every error, in dataset order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.datasets.iter().flat_map(|dataset| dataset.errors.iter())
    }

    /// A run passes iff no dataset reported an error.
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}
