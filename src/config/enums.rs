//! Configuration enumerations.

/// Errors produced while loading or saving configuration files.
pub mod configuration_error;
