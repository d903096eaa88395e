//! # Harbor-Actix Torrent Index
//!
//! A torrent indexing site backend with an integrated forum, built with Rust
//! and the Actix-web framework.
//!
//! ## Overview
//!
//! Harbor-Actix keeps its whole catalog in memory behind sharded read/write
//! locks and persists through write-behind update queues into SQLite, MySQL
//! or PostgreSQL. It serves a REST API for torrent search and upload, user
//! identity with a follow graph, per-user statistics, and a forum pipeline
//! with BBCode rendering.
//!
//! ## Features
//!
//! - **Torrent Catalog**: Metainfo parsing, info-hash deduplication, text and
//!   category search, top/recent/lucky listings, download tracking
//! - **User Identity**: Registration and login with bcrypt and JWT, profiles
//!   with aggregated statistics, follows, bookmarks, avatars
//! - **Forum**: Forums, threads with opening posts, replies, locking,
//!   moderation, read-time BBCode rendering
//! - **Database Agnostic**: SQLite, MySQL, and PostgreSQL support with
//!   customizable schemas
//! - **Blob Storage**: Uploaded torrent files and images on disk under
//!   sanitized, collision-free names
//! - **Security**: Admin API key, constant-time comparisons, input validation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use harbor_actix::config::structs::configuration::Configuration;
//! use harbor_actix::index::structs::torrent_index::TorrentIndex;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(true)?;
//!
//! // Create index instance
//! let index = TorrentIndex::new(config.into(), false).await;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API endpoints for the catalog, users and forum
//! - [`bbcode`] - BBCode to display markup rendering
//! - [`common`] - Shared utilities, error handling, and helper functions
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Multi-database backend support (SQLite, MySQL, PostgreSQL)
//! - [`index`] - Core index state: catalog, users, forums, threads, posts
//! - [`metainfo`] - `.torrent` metainfo parsing and info-hash derivation
//! - [`security`] - Password hashing, token issuance, input validation
//! - [`stats`] - Real-time statistics tracking and monitoring
//! - [`storage`] - On-disk blob storage for torrent files and images
//! - [`structs`] - CLI argument parsing

/// REST API module for the index, user and forum surfaces.
///
/// Provides HTTP endpoints for searching and uploading torrents, managing
/// accounts and the follow graph, and operating the forum, plus the
/// statistics endpoint.
pub mod api;

/// BBCode rendering module.
///
/// Converts raw BBCode post content into display markup at read time with
/// HTML escaping applied first.
pub mod bbcode;

/// Common utilities and shared functionality.
///
/// Contains helper functions for hex conversion, timestamps, logging setup,
/// bind-address checks and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Supports customizable database schemas and multi-server configurations.
pub mod config;

/// Database backend module with multi-database support.
///
/// Provides a unified interface for SQLite, MySQL, and PostgreSQL backends
/// with support for custom table names, load-all reads and batched
/// write-behind saves.
pub mod database;

/// Core index state module.
///
/// Contains the central in-memory stores for torrents, users, forums,
/// threads and posts, their update queues, and every domain operation the
/// API layer exposes.
pub mod index;

/// Torrent metainfo parsing module.
///
/// Decodes bencoded `.torrent` files, derives the info hash over the exact
/// info dictionary bytes, and normalizes single- and multi-file layouts.
pub mod metainfo;

/// Security primitives module.
///
/// Password hashing (bcrypt), session tokens (JWT), admin API keys with
/// constant-time comparison, and input validation.
pub mod security;

/// Statistics tracking and monitoring module.
///
/// Collects real-time metrics on store sizes, update-queue depths and API
/// activity.
pub mod stats;

/// Blob storage module.
///
/// Stores uploaded torrent files and images on disk under sanitized,
/// collision-free names, grouped per category.
pub mod storage;

/// CLI argument parsing and common data structures.
///
/// Defines command-line interface options for the binary including
/// configuration generation and database setup.
pub mod structs;
