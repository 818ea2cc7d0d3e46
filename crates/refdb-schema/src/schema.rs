//! Dataset schemas.

use std::borrow::Cow;

use crate::error::{Result, SchemaError};
use crate::rule::FieldRule;

/// A named column and the rule it must satisfy.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub rule: FieldRule,
}

/// How identifier keys are compared when looking for duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    Exact,
    #[default]
    CaseInsensitive,
}

impl KeyPolicy {
    /// Derive the comparison key for a raw value. The raw value is left as is.
    pub fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(raw),
            Self::CaseInsensitive => Cow::Owned(raw.to_lowercase()),
        }
    }
}

/// Identifier column that must be unique across all rows of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKey {
    pub field: String,
    pub policy: KeyPolicy,
}

/// Ordered field rules for one dataset, plus an optional uniqueness rule.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Schema {
    dataset: String,
    fields: Vec<FieldSpec>,
    unique: Option<UniqueKey>,
}

impl Schema {
    pub fn builder(dataset: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            dataset: dataset.into(),
            fields: Vec::new(),
            unique: None,
        }
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| &spec.rule)
    }

    pub fn unique_key(&self) -> Option<&UniqueKey> {
        self.unique.as_ref()
    }
}

#[derive(Debug)]
pub struct SchemaBuilder {
    dataset: String,
    fields: Vec<FieldSpec>,
    unique: Option<UniqueKey>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            rule,
        });
        self
    }

    #[must_use]
    pub fn unique(mut self, field: impl Into<String>, policy: KeyPolicy) -> Self {
        self.unique = Some(UniqueKey {
            field: field.into(),
            policy,
        });
        self
    }

    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] if a column is declared twice.
    pub fn build(self) -> Result<Schema> {
        for (idx, spec) in self.fields.iter().enumerate() {
            if self.fields[..idx].iter().any(|seen| seen.name == spec.name) {
                return Err(SchemaError::DuplicateField {
                    dataset: self.dataset,
                    field: spec.name.clone(),
                });
            }
        }
        Ok(Schema {
            dataset: self.dataset,
            fields: self.fields,
            unique: self.unique,
        })
    }
}
