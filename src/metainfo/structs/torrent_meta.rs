use serde::{Deserialize, Serialize};
use crate::index::structs::info_hash::InfoHash;
use crate::metainfo::structs::meta_file::MetaFile;

/// Structured metadata extracted from a `.torrent` file.
///
/// `total_size` is always the sum of the file entry sizes. For single-file
/// torrents `files` holds exactly one synthesized entry named after the
/// torrent itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TorrentMeta {
    pub info_hash: InfoHash,
    pub name: String,
    pub total_size: u64,
    pub files: Vec<MetaFile>,
}
