//! Field rules.
//!
//! A [`FieldRule`] is presence + shape + a list of tagged [`Constraint`]s.
//! Rules are plain data; evaluating them against a value happens in the
//! validator and never touches the row itself.

use std::fmt;

use regex::Regex;

pub use refdb_model::ValueKind;

use crate::error::{Result, SchemaError};

/// Default separator for list-valued columns (`c/US;c/CA`).
pub const LIST_SEPARATOR: char = ';';

/// Whether an empty value is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    Required,
    #[default]
    Optional,
}

/// Single value or a separated list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Single,
    /// Every item is checked against the constraints on its own.
    List { separator: char },
}

/// A compiled pattern that must match the whole (trimmed) value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|err| {
            SchemaError::InvalidPattern {
                pattern: source.clone(),
                source: err,
            }
        })?;
        Ok(Self { source, regex })
    }

    /// Pattern as written in the schema.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// Fixed set of accepted values, compared case-sensitively.
///
/// Members keep declaration order; repeats are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    values: Vec<String>,
}

impl ValueSet {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for value in values {
            let value = value.into();
            if !set.contains(&value) {
                set.values.push(value);
            }
        }
        set
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|member| member == value)
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[String] {
        &self.values
    }
}

/// Named custom predicate. `Err` carries the reason shown to the user.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub predicate: fn(&str) -> std::result::Result<(), String>,
}

impl Check {
    pub fn run(&self, value: &str) -> std::result::Result<(), String> {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// One constraint on a non-empty value.
#[derive(Debug, Clone)]
pub enum Constraint {
    Type(ValueKind),
    Pattern(Pattern),
    OneOf(ValueSet),
    Custom(Check),
}

/// Validation contract for a single column.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    pub presence: Presence,
    pub shape: Shape,
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn required() -> Self {
        Self {
            presence: Presence::Required,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    /// Treat the value as a `;`-separated list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.shape = Shape::List {
            separator: LIST_SEPARATOR,
        };
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.constraints.push(Constraint::Type(kind));
        self
    }

    #[must_use]
    pub fn boolean(self) -> Self {
        self.kind(ValueKind::Boolean)
    }

    #[must_use]
    pub fn integer(self) -> Self {
        self.kind(ValueKind::Integer)
    }

    /// Add a full-match pattern.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] if the pattern does not compile.
    pub fn pattern(mut self, source: &str) -> Result<Self> {
        self.constraints
            .push(Constraint::Pattern(Pattern::new(source)?));
        Ok(self)
    }

    #[must_use]
    pub fn one_of(mut self, values: ValueSet) -> Self {
        self.constraints.push(Constraint::OneOf(values));
        self
    }

    #[must_use]
    pub fn check(mut self, check: Check) -> Self {
        self.constraints.push(Constraint::Custom(check));
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    pub fn is_list(&self) -> bool {
        matches!(self.shape, Shape::List { .. })
    }
}
