//! Row-level validation.

use refdb_model::{Row, Violation};
use refdb_schema::Schema;

use crate::field::evaluate;

/// Apply every field rule of `schema` to `row`.
///
/// All fields are checked even after the first failure. Columns the schema
/// does not know about are ignored.
pub fn validate_row(schema: &Schema, row: &Row) -> Vec<Violation> {
    schema
        .fields()
        .iter()
        .flat_map(|spec| evaluate(&spec.name, &spec.rule, row.get(&spec.name)))
        .collect()
}
