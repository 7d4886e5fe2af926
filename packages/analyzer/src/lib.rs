#![deny(clippy::all)]

/**
 * Symfony Container Analyzer - Rust Implementation
 *
 * Static analysis of service access against a Symfony dependency-injection
 * container: flags reads of private services through a generic container
 * reference before the code ever runs.
 */
pub mod diagnostics;
pub mod engine;
pub mod reflection;
pub mod rules;
pub mod symfony;
pub mod testing;

/// Analyzer version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
