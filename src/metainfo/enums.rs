//! Metainfo enumerations.

/// Errors produced while parsing `.torrent` bytes.
pub mod metainfo_error;
