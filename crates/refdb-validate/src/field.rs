//! Field rule evaluation.
//!
//! Turns one raw value into zero or more [`Violation`]s. Values are trimmed
//! before any check; an empty value only matters for required fields.

use refdb_model::{ValueKind, Violation};
use refdb_schema::{Constraint, FieldRule, Shape};

/// Evaluate `rule` against the raw value of column `field`.
///
/// `raw` is `None` when the row has no such column, which is treated the same
/// as an empty value.
pub fn evaluate(field: &str, rule: &FieldRule, raw: Option<&str>) -> Vec<Violation> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        if rule.is_required() {
            return vec![Violation::Required {
                field: field.to_string(),
            }];
        }
        return Vec::new();
    }

    match rule.shape {
        Shape::Single => check_value(field, value, &rule.constraints),
        Shape::List { separator } => value
            .split(separator)
            .enumerate()
            .flat_map(|(pos, item)| {
                let item_field = format!("{field}[{pos}]");
                let item = item.trim();
                if item.is_empty() {
                    vec![Violation::Required { field: item_field }]
                } else {
                    check_value(&item_field, item, &rule.constraints)
                }
            })
            .collect(),
    }
}

/// Run every constraint against a non-empty value.
///
/// A failed type coercion ends evaluation of this value: the remaining
/// constraints assume the declared type.
fn check_value(field: &str, value: &str, constraints: &[Constraint]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for constraint in constraints {
        match constraint {
            Constraint::Type(kind) => {
                if !coerces(value, *kind) {
                    violations.push(Violation::TypeMismatch {
                        field: field.to_string(),
                        value: value.to_string(),
                        expected: *kind,
                    });
                    break;
                }
            }
            Constraint::Pattern(pattern) => {
                if !pattern.is_match(value) {
                    violations.push(Violation::PatternMismatch {
                        field: field.to_string(),
                        value: value.to_string(),
                        pattern: pattern.as_str().to_string(),
                    });
                }
            }
            Constraint::OneOf(set) => {
                if !set.contains(value) {
                    violations.push(Violation::NotAllowed {
                        field: field.to_string(),
                        value: value.to_string(),
                        allowed: set.members().to_vec(),
                    });
                }
            }
            Constraint::Custom(check) => {
                if let Err(reason) = check.run(value) {
                    violations.push(Violation::Custom {
                        field: field.to_string(),
                        value: value.to_string(),
                        reason,
                    });
                }
            }
        }
    }
    violations
}

fn coerces(value: &str, kind: ValueKind) -> bool {
    match kind {
        ValueKind::String => true,
        ValueKind::Integer => value.parse::<i64>().is_ok(),
        // written by the CSV tooling as upper-case literals
        ValueKind::Boolean => matches!(value, "TRUE" | "FALSE"),
    }
}
