//! Dataset schemas for the reference database.
//!
//! # Example
//!
//! ```ignore
//! use refdb_schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::builtin()?;
//! let channels = registry.lookup("channels")?;
//! assert!(channels.unique_key().is_some());
//! ```

#![deny(unsafe_code)]

mod builtin;
pub mod checks;
pub mod error;
pub mod registry;
pub mod rule;
pub mod schema;

pub use builtin::DEFAULT_DATASETS;
pub use error::{Result, SchemaError};
pub use registry::SchemaRegistry;
pub use rule::{
    Check, Constraint, FieldRule, LIST_SEPARATOR, Pattern, Presence, Shape, ValueKind, ValueSet,
};
pub use schema::{FieldSpec, KeyPolicy, Schema, SchemaBuilder, UniqueKey};
