//! Implementation blocks for statistics operations.

/// Statistics methods on `TorrentIndex`.
pub mod torrent_index;
