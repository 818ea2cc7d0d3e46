use refdb_ingest::IngestError;
use refdb_schema::SchemaError;
use thiserror::Error;

/// Failures that abort a validation run. Data errors never end up here.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// No schema registered for a dataset, or a schema is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A dataset file could not be loaded.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl ValidateError {
    /// True for setup defects, as opposed to unreadable input files.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
