use std::collections::BTreeMap;

use crate::builtin;
use crate::error::{Result, SchemaError};
use crate::schema::Schema;

/// Dataset name to schema. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the schemas of every known dataset.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in schema is malformed.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for schema in builtin::schemas()? {
            registry.insert(schema);
        }
        Ok(registry)
    }

    /// Insert a schema, replacing any existing one for the same dataset.
    pub fn insert(&mut self, schema: Schema) {
        self.schemas.insert(schema.dataset().to_string(), schema);
    }

    pub fn get(&self, dataset: &str) -> Option<&Schema> {
        self.schemas.get(dataset)
    }

    /// Resolve the schema for a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownDataset`] when nothing is registered under `dataset`.
    pub fn lookup(&self, dataset: &str) -> Result<&Schema> {
        self.get(dataset)
            .ok_or_else(|| SchemaError::UnknownDataset {
                name: dataset.to_string(),
            })
    }

    /// Registered dataset names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
