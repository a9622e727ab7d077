//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dispatchlog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the console/desk presentation layers.
    println!("dispatchlog_core ping={}", dispatchlog_core::ping());
    println!(
        "dispatchlog_core version={}",
        dispatchlog_core::core_version()
    );
}
