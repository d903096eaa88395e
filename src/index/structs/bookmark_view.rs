use serde::Serialize;
use crate::index::enums::torrent_category::TorrentCategory;
use crate::index::structs::info_hash::InfoHash;

/// Bookmarked torrent as listed on a profile.
#[derive(Serialize, Clone, Debug)]
pub struct BookmarkView {
    pub info_hash: InfoHash,
    pub name: String,
    pub category: TorrentCategory,
}
