//! Call-store contracts and the snapshot-backed implementation.
//!
//! # Responsibility
//! - Own the authoritative in-memory record collection.
//! - Keep the persisted snapshot synchronized with it.
//!
//! # Invariants
//! - Insertion order is preserved and is the only ordering.
//! - Load faults recover silently to an empty collection; save faults are
//!   reported but never roll back the in-memory mutation.

pub mod call_store;
