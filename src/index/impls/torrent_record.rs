use std::sync::atomic::{AtomicU64, Ordering};
use crate::index::structs::torrent_record::TorrentRecord;

impl TorrentRecord {
    pub fn seeders_count(&self) -> u64 {
        self.seeders.load(Ordering::SeqCst)
    }

    pub fn leechers_count(&self) -> u64 {
        self.leechers.load(Ordering::SeqCst)
    }

    pub fn downloads_count(&self) -> u64 {
        self.downloads.load(Ordering::SeqCst)
    }
}

impl Clone for TorrentRecord {
    fn clone(&self) -> TorrentRecord {
        TorrentRecord {
            info_hash: self.info_hash,
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            total_size: self.total_size,
            files: self.files.clone(),
            uploader: self.uploader,
            seeders: AtomicU64::new(self.seeders.load(Ordering::SeqCst)),
            leechers: AtomicU64::new(self.leechers.load(Ordering::SeqCst)),
            downloads: AtomicU64::new(self.downloads.load(Ordering::SeqCst)),
            torrent_blob: self.torrent_blob.clone(),
            image_blobs: self.image_blobs.clone(),
            created_at: self.created_at,
        }
    }
}
