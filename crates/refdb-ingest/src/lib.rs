//! Reference dataset ingestion.
//!
//! Turns dataset files into [`Row`](refdb_model::Row) sequences and derives
//! dataset names from paths. Loading failures are surfaced as [`IngestError`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use refdb_ingest::{CsvLoader, RowSource, dataset_name};
//!
//! let path = Path::new("database/channels.csv");
//! let rows = CsvLoader.load(path)?;
//! assert_eq!(dataset_name(path), "channels");
//! ```

mod error;
mod loader;
mod naming;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use loader::{CsvLoader, RowSource, read_rows};

// === Dataset Naming ===
pub use naming::{dataset_name, dataset_paths, is_csv};
