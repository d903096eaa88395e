//! Metainfo data structures.

/// A single file entry inside a torrent.
pub mod meta_file;

/// Parsed `.torrent` metadata.
pub mod torrent_meta;
