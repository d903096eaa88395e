//! Torrent metainfo parsing module.
//!
//! This module turns the raw bytes of an uploaded `.torrent` file into a
//! structured `TorrentMeta` value: display name, info hash, total size and
//! the per-file layout. Parsing is a pure transform with no side effects,
//! so identical input bytes always produce an identical `TorrentMeta`.
//!
//! # Info Hash
//!
//! The info hash is the SHA-1 digest of the bencoded `info` dictionary,
//! taken over the exact byte slice of the original input. This matches the
//! hash real BitTorrent clients and trackers compute for the same file.
//!
//! # File Layouts
//!
//! - **Single-file**: `info.length` holds the size; a one-entry file list
//!   is synthesized using the torrent name as the path.
//! - **Multi-file**: `info.files` holds `{length, path}` entries; path
//!   segments are joined with `/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use harbor_actix::metainfo::structs::torrent_meta::TorrentMeta;
//!
//! let meta = TorrentMeta::from_bytes(&bytes)?;
//! println!("{} ({} bytes)", meta.name, meta.total_size);
//! ```

/// Metainfo error enumeration.
pub mod enums;

/// Implementation blocks for metainfo parsing.
pub mod impls;

/// Metainfo data structures.
pub mod structs;

/// Unit tests for metainfo parsing.
pub mod tests;
