//! Database backend traits.

/// Uniform load/save surface implemented by every engine connector.
pub mod database_backend;
