//! Whole-file snapshot reads and writes.
//!
//! The persisted form is one self-describing JSON document holding the entire
//! ordered record sequence. Concurrent writers are not coordinated; last
//! writer wins, as the surrounding store contract states.

use super::{SnapshotError, SnapshotResult};
use crate::model::call::CallRecord;
use std::fs;
use std::path::Path;

/// Reads the full record sequence from the snapshot at `path`.
///
/// # Errors
/// - `Io` when the file is missing or unreadable (`is_not_found()`
///   distinguishes the missing case).
/// - `Decode` when the bytes are not a valid record sequence.
pub fn read_snapshot(path: impl AsRef<Path>) -> SnapshotResult<Vec<CallRecord>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(SnapshotError::Decode)
}

/// Replaces the snapshot at `path` with the given record sequence.
///
/// The write overwrites in place; interleaving with another writer can
/// corrupt the file, an accepted limitation of the single-process design.
///
/// # Errors
/// - `Encode` when the sequence cannot be serialized.
/// - `Io` when the file cannot be written.
pub fn write_snapshot(path: impl AsRef<Path>, records: &[CallRecord]) -> SnapshotResult<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(records).map_err(SnapshotError::Encode)?;
    fs::write(path, bytes).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })
}
