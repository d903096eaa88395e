//! Persistence layer for the index stores.
//!
//! One connector per supported engine (SQLite, MySQL, PostgreSQL), all
//! spoken to through [`structs::database_connector::DatabaseConnector`].
//! Each of the five stores gets a full-table load at boot and a
//! queue-driven save; values are always bound as parameters, only the
//! dialect fragments differ per engine.

/// Supported database engines.
pub mod enums;

/// Dialect fragments shared by the engine connectors.
pub mod helpers;

/// Connector implementations per engine plus the dispatch layer.
pub mod impls;

/// Connector structures.
pub mod structs;

/// Backend trait implemented by every engine connector.
pub mod traits;
