//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep embedding layers decoupled from storage details.

pub mod dispatch_service;
