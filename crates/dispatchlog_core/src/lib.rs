//! Core domain logic for dispatchlog.
//! This crate is the single source of truth for call-record invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::call::{CallRecord, Service, ServiceSet};
pub use service::dispatch_service::{now_epoch_ms, DispatchService};
pub use snapshot::{read_snapshot, write_snapshot, SnapshotError, SnapshotResult};
pub use store::call_store::{CallStore, SnapshotCallStore, StoreProfile};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
