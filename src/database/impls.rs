//! Database connector implementations.

/// Engine dispatch for the unified connector.
pub mod database_connector;

/// SQLite connector.
pub mod database_connector_sqlite;

/// MySQL/MariaDB connector.
pub mod database_connector_mysql;

/// PostgreSQL connector.
pub mod database_connector_pgsql;
