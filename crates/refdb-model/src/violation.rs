//! Violation reasons.
//!
//! Each variant carries only the data its message needs. Messages follow the
//! wording reviewers of the database already know, e.g.
//! `"country" with value "usa" fails to match the required pattern: /^[A-Z]{2}$/`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive type a field value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    String,
    Integer,
    Boolean,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Noun phrase used in type-mismatch messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
        }
    }
}

/// A single cause of invalidity for one field (or one row, for duplicates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Required field is absent or empty.
    Required { field: String },
    /// Value does not parse as the declared type.
    TypeMismatch {
        field: String,
        value: String,
        expected: ValueKind,
    },
    /// Value does not fully match the declared pattern.
    PatternMismatch {
        field: String,
        value: String,
        pattern: String,
    },
    /// Value is not a member of the allowed set.
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
    /// A named predicate rejected the value.
    Custom {
        field: String,
        value: String,
        reason: String,
    },
    /// Identifier already used by an earlier row.
    Duplicate { field: String, value: String },
}

impl Violation {
    /// Field the violation refers to. List items carry their position, e.g. `languages[1]`.
    pub fn field(&self) -> &str {
        match self {
            Violation::Required { field } => field,
            Violation::TypeMismatch { field, .. } => field,
            Violation::PatternMismatch { field, .. } => field,
            Violation::NotAllowed { field, .. } => field,
            Violation::Custom { field, .. } => field,
            Violation::Duplicate { field, .. } => field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required { field } => write!(f, "\"{field}\" is required"),
            Violation::TypeMismatch {
                field, expected, ..
            } => write!(f, "\"{field}\" must be {}", expected.label()),
            Violation::PatternMismatch {
                field,
                value,
                pattern,
            } => write!(
                f,
                "\"{field}\" with value \"{value}\" fails to match the required pattern: /{pattern}/"
            ),
            Violation::NotAllowed { field, allowed, .. } => {
                write!(f, "\"{field}\" must be one of [{}]", allowed.join(", "))
            }
            Violation::Custom {
                field,
                value,
                reason,
            } => write!(f, "\"{field}\" with value \"{value}\" {reason}"),
            Violation::Duplicate { field, value } => {
                write!(f, "Entry with the {field} \"{value}\" already exists")
            }
        }
    }
}
