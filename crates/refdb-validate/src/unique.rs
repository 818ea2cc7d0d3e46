//! Cross-row uniqueness.

use std::collections::HashSet;

use refdb_model::{Row, Violation};
use refdb_schema::UniqueKey;

/// Find rows whose key repeats an earlier row's key.
///
/// Keys are compared after normalization by the key's policy; the rows are
/// not modified. The first occurrence of a key is never flagged, only later
/// ones. Rows with an empty key are skipped, the row validator reports those.
///
/// Returns `(row index, violation)` pairs in row order.
pub fn find_duplicates(rows: &[Row], key: &UniqueKey) -> Vec<(usize, Violation)> {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut duplicates = Vec::new();

    for row in rows {
        let Some(raw) = row.get(&key.field).map(str::trim) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }

        let normalized = key.policy.normalize(raw).into_owned();
        if seen.contains(&normalized) {
            duplicates.push((
                row.index(),
                Violation::Duplicate {
                    field: key.field.clone(),
                    value: normalized,
                },
            ));
        } else {
            seen.insert(normalized);
        }
    }

    duplicates
}
