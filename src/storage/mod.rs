//! Blob storage module for uploaded files.
//!
//! Stores uploaded `.torrent` files and screenshot images on disk under
//! the configured uploads root, one subdirectory per blob kind. Stored
//! names are prefixed with a generated UUID so uploads can never collide
//! or overwrite each other, and original names are sanitized to a safe
//! character set before use.
//!
//! Avatars are kept inline in user records; this module only serves the
//! default avatar fallback from disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use harbor_actix::storage::enums::blob_kind::BlobKind;
//!
//! let stored_name = storage.store(BlobKind::Torrents, "ubuntu.torrent", &bytes)?;
//! let bytes_again = storage.read(BlobKind::Torrents, &stored_name)?;
//! storage.delete(BlobKind::Torrents, &stored_name)?;
//! ```

/// Storage enumerations (blob kinds, error types).
pub mod enums;

/// Implementation blocks for blob storage.
pub mod impls;

/// Blob storage data structures.
pub mod structs;

/// Unit tests for blob storage.
pub mod tests;
