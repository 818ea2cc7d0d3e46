//! Dataset naming and input filtering.

use std::path::{Path, PathBuf};

/// Dataset name for a file: base name without extension, lowercased.
///
/// `database/channels.csv` -> `channels`.
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Whether a path names a CSV file. Only the `.csv` suffix counts.
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "csv")
}

/// `<dir>/<dataset>.csv` for every dataset name, in order.
pub fn dataset_paths<S: AsRef<str>>(dir: &Path, datasets: &[S]) -> Vec<PathBuf> {
    datasets
        .iter()
        .map(|name| dir.join(format!("{}.csv", name.as_ref())))
        .collect()
}
