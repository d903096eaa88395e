//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the index configuration
//! from TOML files. It provides configuration options for all subsystems.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **index**: Core index settings (admin API key, JWT signing, page sizes, upload caps)
//! - **database**: Database connection and schema settings
//! - **database_structure**: Customizable table names per store
//! - **storage**: Blob storage locations for uploaded files
//! - **api_server**: REST API server instances
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Customizable database table names
//! - Multiple server instance configurations
//! - Default value generation
//!
//! # Example
//!
//! ```rust,ignore
//! use harbor_actix::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration enumerations (error types).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
