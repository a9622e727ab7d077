//! Snapshot persistence for the call collection.
//!
//! # Responsibility
//! - Serialize the whole ordered record sequence to one file and back.
//! - Keep serialization details inside the core persistence boundary.
//!
//! # Invariants
//! - A snapshot round-trip is lossless for every record field, including the
//!   timestamp and the service set.
//! - Writes replace the entire file; there is no partial or incremental form.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file;

pub use file::{read_snapshot, write_snapshot};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error raised by snapshot reads and writes.
#[derive(Debug)]
pub enum SnapshotError {
    /// Filesystem failure while reading or writing the snapshot file.
    Io { path: PathBuf, source: io::Error },
    /// The record sequence could not be serialized.
    Encode(serde_json::Error),
    /// The persisted bytes are not a valid record sequence.
    Decode(serde_json::Error),
}

impl SnapshotError {
    /// Whether this error is a missing snapshot file.
    ///
    /// Recovery policy treats a missing file as an expected first run and
    /// anything else as a corrupt or unreadable snapshot.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "snapshot io failure at `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Decode(err) => write!(f, "invalid snapshot contents: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}
