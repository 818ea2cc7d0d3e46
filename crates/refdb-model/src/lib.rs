//! Core data types shared by the reference dataset validator.
//!
//! - [`Row`]: one loaded record with its position in the source file
//! - [`Violation`]: a single structured reason a field or row is invalid
//! - [`ValidationError`]: a `(line, message)` pair surfaced to the user
//! - [`DatasetReport`] / [`ValidationReport`]: aggregated outcome of a run

pub mod report;
pub mod row;
pub mod violation;

pub use report::{DatasetReport, ValidationError, ValidationReport};
pub use row::{FIRST_DATA_LINE, Row, line_for_index};
pub use violation::{ValueKind, Violation};
