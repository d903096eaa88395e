//! Implementation blocks for configuration types.

/// Loading, saving and validation for `Configuration`.
pub mod configuration;

/// Display implementations for `ConfigurationError`.
pub mod configuration_error;
