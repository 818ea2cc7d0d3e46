//! Validation engine for the reference datasets.
//!
//! - [`evaluate`]: one field rule against one raw value
//! - [`validate_row`]: a whole schema against one row, no early exit
//! - [`find_duplicates`]: identifier uniqueness across rows
//! - [`Validator`]: files in, [`ValidationReport`](refdb_model::ValidationReport) out
//!
//! # Example
//!
//! ```ignore
//! use refdb_ingest::CsvLoader;
//! use refdb_schema::SchemaRegistry;
//! use refdb_validate::Validator;
//!
//! let registry = SchemaRegistry::builtin()?;
//! let report = Validator::new(&registry).run_defaults("database".as_ref(), &CsvLoader)?;
//! if !report.passed() {
//!     std::process::exit(1);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod field;
pub mod row;
pub mod unique;

pub use engine::{Validator, validate_rows};
pub use error::{Result, ValidateError};
pub use field::evaluate;
pub use row::validate_row;
pub use unique::find_duplicates;
