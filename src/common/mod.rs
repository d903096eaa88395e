//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the index codebase.
//!
//! # Utilities
//!
//! - Hex encoding/decoding
//! - Logging setup
//! - Timestamp utilities
//! - Bind address preflight checks
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common functionality.
pub mod tests;
