//! CSV dataset loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use refdb_model::Row;

use crate::error::{IngestError, Result};

/// Byte-order mark some editors prepend to the first header.
const BOM: char = '\u{feff}';

/// Anything that can materialize the rows of a dataset file.
pub trait RowSource {
    /// Load every data row of `path`, in file order.
    ///
    /// # Errors
    ///
    /// Any failure is fatal for the whole run.
    fn load(&self, path: &Path) -> Result<Vec<Row>>;
}

/// Loads rows from CSV files on disk. Values are kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl RowSource for CsvLoader {
    fn load(&self, path: &Path) -> Result<Vec<Row>> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        read_rows(file, path)
    }
}

/// Parse CSV text into rows. `path` is used for error messages only.
pub fn read_rows<R: Read>(reader: R, path: &Path) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .iter()
        .map(|header| header.trim_start_matches(BOM).to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        rows.push(Row::new(
            index,
            headers.iter().cloned().zip(record.iter().map(str::to_string)),
        ));
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded dataset");
    Ok(rows)
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = err.kind() {
        return IngestError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(io.kind(), io.to_string()),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
