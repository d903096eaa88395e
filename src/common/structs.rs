//! Data structures shared across modules.

/// String-backed error type for fallible helpers.
pub mod custom_error;
