//! Implementation blocks for metainfo parsing.

/// `.torrent` byte parsing for `TorrentMeta`.
pub mod torrent_meta;
