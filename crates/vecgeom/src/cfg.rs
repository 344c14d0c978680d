//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants, shared by approximate comparisons in tests and the CLI.
//!   No operation validates its inputs against these values.

/// Absolute tolerance for approximate vector comparisons.
pub const EPS: f64 = 1e-9;
