#![deny(unsafe_code)]

use thiserror::Error;

/// Schema definition and lookup failures.
///
/// These are configuration errors: they abort a run instead of being
/// reported against individual rows.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("\"{name}\" scheme is missing")]
    UnknownDataset { name: String },

    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("field \"{field}\" is defined twice in the {dataset} schema")]
    DuplicateField { dataset: String, field: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
