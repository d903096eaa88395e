use serde::Serialize;
use crate::index::enums::torrent_category::TorrentCategory;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::user_summary::UserSummary;
use crate::metainfo::structs::meta_file::MetaFile;

/// Catalog entry as served to clients, with counters snapshotted and the
/// uploader reference resolved.
#[derive(Serialize, Clone, Debug)]
pub struct TorrentView {
    pub info_hash: InfoHash,
    pub name: String,
    pub description: String,
    pub category: TorrentCategory,
    pub total_size: u64,
    pub files: Vec<MetaFile>,
    pub uploader: UserSummary,
    pub seeders: u64,
    pub leechers: u64,
    pub downloads: u64,
    pub created_at: i64,
}
