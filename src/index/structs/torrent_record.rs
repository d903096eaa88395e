use std::sync::atomic::AtomicU64;
use serde::Serialize;
use crate::index::enums::torrent_category::TorrentCategory;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::user_id::UserId;
use crate::metainfo::structs::meta_file::MetaFile;

/// One stored catalog entry.
///
/// The info hash doubles as the map key; it is kept in the record as well so
/// a cloned record stays self-describing. The three counters are atomics:
/// download tracking bumps them under the store's shared read lock, so
/// concurrent bumps on the same record never lose updates.
///
/// `uploader` is a weak reference. The account may be removed after the
/// upload, in which case reads resolve it to a "Deleted User" placeholder.
#[derive(Serialize, Debug)]
pub struct TorrentRecord {
    pub info_hash: InfoHash,
    pub name: String,
    pub description: String,
    pub category: TorrentCategory,
    pub total_size: u64,
    pub files: Vec<MetaFile>,
    pub uploader: UserId,
    pub seeders: AtomicU64,
    pub leechers: AtomicU64,
    pub downloads: AtomicU64,
    #[serde(skip_serializing)]
    pub torrent_blob: String,
    pub image_blobs: Vec<String>,
    pub created_at: i64,
}
