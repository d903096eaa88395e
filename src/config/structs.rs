//! Configuration data structures.

/// Root configuration loaded from `config.toml`.
pub mod configuration;

/// Core index settings (tokens, page sizes, upload caps).
pub mod index_config;

/// REST API server instance settings.
pub mod api_server_config;

/// Database connection settings.
pub mod database_config;

/// Table name settings per persistent store.
pub mod database_structure_config;

/// Torrents table settings.
pub mod database_structure_config_torrents;

/// Users table settings.
pub mod database_structure_config_users;

/// Forums table settings.
pub mod database_structure_config_forums;

/// Threads table settings.
pub mod database_structure_config_threads;

/// Posts table settings.
pub mod database_structure_config_posts;

/// Blob storage locations.
pub mod storage_config;
