//! Call-store trait and snapshot-backed implementation.
//!
//! # Responsibility
//! - Provide the record-level operations embedding layers program against.
//! - Re-persist the whole collection after every successful mutation.
//!
//! # Invariants
//! - The in-memory sequence is authoritative; a failed save leaves memory and
//!   disk divergent until the next successful save, never the reverse.
//! - No uniqueness constraint exists on any field; full duplicates are legal.
//! - Removal is the only way a record leaves the collection.

use crate::model::call::{CallRecord, Service};
use crate::snapshot::{read_snapshot, write_snapshot, SnapshotResult};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

const CONSOLE_SNAPSHOT_FILE_NAME: &str = "dispatch_calls.json";
const DESK_SNAPSHOT_FILE_NAME: &str = "desk_calls.json";

/// Deployment profile selecting a default snapshot location.
///
/// The console and desk entry points each own an independent store file; the
/// two deployments are never reconciled with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreProfile {
    /// Store used by the console entry point.
    Console,
    /// Store used by the graphical desk entry point.
    Desk,
}

impl StoreProfile {
    /// Default snapshot file name for this deployment.
    pub fn snapshot_file_name(self) -> &'static str {
        match self {
            Self::Console => CONSOLE_SNAPSHOT_FILE_NAME,
            Self::Desk => DESK_SNAPSHOT_FILE_NAME,
        }
    }
}

/// Record-level store interface consumed by embedding layers.
///
/// Mutating operations persist the collection before returning. An `Err`
/// from any of them means the in-memory mutation already happened and only
/// the snapshot write failed.
pub trait CallStore {
    /// Appends `record` to the end of the collection and persists.
    fn add(&mut self, record: CallRecord) -> SnapshotResult<()>;

    /// Removes the first record structurally equal to `record`.
    ///
    /// Returns `Ok(true)` when a record was removed and persisted and
    /// `Ok(false)` when nothing matched; the no-match case performs no write
    /// and leaves the collection untouched.
    fn remove_by_identity(&mut self, record: &CallRecord) -> SnapshotResult<bool>;

    /// Removes every record whose caller name matches case-insensitively and
    /// whose phone number matches exactly, then persists regardless of
    /// whether anything matched.
    fn remove_by_match(&mut self, caller_name: &str, phone_number: &str) -> SnapshotResult<()>;

    /// Returns an owned copy of the collection in insertion order.
    ///
    /// Mutating the returned value never affects the store.
    fn list_all(&self) -> Vec<CallRecord>;

    /// Returns the records requiring `service`, relative order preserved.
    fn list_by_service(&self, service: Service) -> Vec<CallRecord>;
}

/// Snapshot-file-backed call store.
///
/// One instance owns one persisted location for the lifetime of the process;
/// nothing guards concurrent access from elsewhere.
pub struct SnapshotCallStore {
    path: PathBuf,
    records: Vec<CallRecord>,
}

impl SnapshotCallStore {
    /// Opens the store at `path`, loading the persisted collection.
    ///
    /// Any load failure starts the store with an empty collection instead of
    /// surfacing an error: a missing snapshot is an expected first run, and a
    /// corrupt one is recovered from by starting fresh. Diagnostics go to the
    /// log only.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = match read_snapshot(&path) {
            Ok(records) => {
                info!(
                    "event=store_open module=store status=ok count={} path={}",
                    records.len(),
                    path.display()
                );
                records
            }
            Err(err) if err.is_not_found() => {
                info!(
                    "event=store_open module=store status=fresh path={}",
                    path.display()
                );
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=store_open module=store status=recovered path={} error={}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        };
        Self { path, records }
    }

    /// Opens the deployment-default location for `profile` in the working
    /// directory.
    pub fn open_profile(profile: StoreProfile) -> Self {
        Self::open(profile.snapshot_file_name())
    }

    /// Path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> SnapshotResult<()> {
        if let Err(err) = write_snapshot(&self.path, &self.records) {
            error!(
                "event=store_save module=store status=error path={} error={}",
                self.path.display(),
                err
            );
            return Err(err);
        }
        Ok(())
    }
}

impl CallStore for SnapshotCallStore {
    fn add(&mut self, record: CallRecord) -> SnapshotResult<()> {
        self.records.push(record);
        self.persist()
    }

    fn remove_by_identity(&mut self, record: &CallRecord) -> SnapshotResult<bool> {
        let Some(index) = self.records.iter().position(|current| current == record) else {
            return Ok(false);
        };

        self.records.remove(index);
        self.persist()?;
        Ok(true)
    }

    fn remove_by_match(&mut self, caller_name: &str, phone_number: &str) -> SnapshotResult<()> {
        let before = self.records.len();
        self.records.retain(|record| {
            !(record.caller_name().eq_ignore_ascii_case(caller_name)
                && record.phone_number() == phone_number)
        });
        debug!(
            "event=store_remove_match module=store removed={} path={}",
            before - self.records.len(),
            self.path.display()
        );
        self.persist()
    }

    fn list_all(&self) -> Vec<CallRecord> {
        self.records.clone()
    }

    fn list_by_service(&self, service: Service) -> Vec<CallRecord> {
        self.records
            .iter()
            .filter(|record| record.requires(service))
            .cloned()
            .collect()
    }
}
