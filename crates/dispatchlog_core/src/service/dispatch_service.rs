//! Dispatch use-case service.
//!
//! # Responsibility
//! - Build records from collaborator-supplied parts and delegate to a store.
//! - Default the recording timestamp when the caller omits one.
//!
//! # Invariants
//! - No validation happens here; shape guarantees belong to the embedding
//!   layer exactly as for direct store access.
//! - Service APIs never bypass store persistence contracts.

use crate::model::call::{CallRecord, Service, ServiceSet};
use crate::store::call_store::CallStore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Use-case facade over a [`CallStore`] implementation.
pub struct DispatchService<S: CallStore> {
    store: S,
}

impl<S: CallStore> DispatchService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Records a new call built from collaborator-validated parts.
    ///
    /// # Contract
    /// - `recorded_at` defaults to the current time when `None`.
    /// - Returns the stored record. An `Err` means the record is in memory
    ///   but the snapshot write failed.
    pub fn record_call(
        &mut self,
        caller_name: impl Into<String>,
        phone_number: impl Into<String>,
        description: impl Into<String>,
        services_required: ServiceSet,
        recorded_at: Option<i64>,
    ) -> crate::snapshot::SnapshotResult<CallRecord> {
        let record = CallRecord::new(
            caller_name,
            phone_number,
            description,
            services_required,
            recorded_at.unwrap_or_else(now_epoch_ms),
        );
        self.store.add(record.clone())?;
        Ok(record)
    }

    /// Removes the first record structurally equal to `record`.
    pub fn remove_by_identity(
        &mut self,
        record: &CallRecord,
    ) -> crate::snapshot::SnapshotResult<bool> {
        self.store.remove_by_identity(record)
    }

    /// Removes every record matching the caller name (case-insensitive) and
    /// exact phone number.
    pub fn remove_by_match(
        &mut self,
        caller_name: &str,
        phone_number: &str,
    ) -> crate::snapshot::SnapshotResult<()> {
        self.store.remove_by_match(caller_name, phone_number)
    }

    /// Returns the full collection in insertion order.
    pub fn list_all(&self) -> Vec<CallRecord> {
        self.store.list_all()
    }

    /// Returns the records requiring `service`, relative order preserved.
    pub fn list_by_service(&self, service: Service) -> Vec<CallRecord> {
        self.store.list_by_service(service)
    }
}

/// Current time in epoch milliseconds.
///
/// Clamps to zero if the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
