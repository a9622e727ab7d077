//! Domain model for emergency-call reports.
//!
//! # Responsibility
//! - Define the canonical call record and its closed service enumeration.
//! - Keep record identity structural: equality over all fields, no synthetic
//!   keys.
//!
//! # Invariants
//! - A `CallRecord` never changes after construction; resolving a call is
//!   modeled as removal, not as an edit.
//! - The service enumeration is closed; unknown service names never enter the
//!   model.

pub mod call;
