use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use chrono::Utc;
use log::{error, info};
use crate::index::enums::index_error::IndexError;
use crate::index::enums::query_order::QueryOrder;
use crate::index::enums::torrent_category::TorrentCategory;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::paged_result::PagedResult;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::index::structs::user_id::UserId;
use crate::metainfo::structs::torrent_meta::TorrentMeta;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub async fn load_torrents(&self, torrent_index: Arc<TorrentIndex>)
    {
        if let Ok(torrents) = self.sqlx.load_torrents(torrent_index).await {
            info!("Loaded {torrents} torrents");
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_torrents(&self, torrent_index: Arc<TorrentIndex>, torrents: BTreeMap<InfoHash, (TorrentRecord, UpdatesAction)>) -> Result<(), ()>
    {
        let torrents_len = torrents.len();
        match self.sqlx.save_torrents(torrent_index, torrents).await {
            Ok(_) => {
                info!("[SYNC TORRENTS] Synced {torrents_len} torrents");
                Ok(())
            }
            Err(_) => {
                error!("[SYNC TORRENTS] Unable to sync {torrents_len} torrents");
                Err(())
            }
        }
    }

    /// Files extracted metadata into the catalog.
    ///
    /// The vacant-entry insert under the write lock is the de-duplication
    /// point: of two concurrent uploads with the same info hash exactly one
    /// lands, the other gets the duplicate error. The caller owns the
    /// already-stored side files and must delete them on that error.
    #[tracing::instrument(level = "debug")]
    pub fn ingest_torrent(&self, meta: &TorrentMeta, description: &str, category: TorrentCategory, uploader: UserId, torrent_blob: String, image_blobs: Vec<String>) -> Result<TorrentRecord, IndexError>
    {
        if description.trim().is_empty() {
            return Err(IndexError::ValidationError("description must not be empty".to_string()));
        }

        let record = TorrentRecord {
            info_hash: meta.info_hash,
            name: meta.name.clone(),
            description: description.to_string(),
            category,
            total_size: meta.total_size,
            files: meta.files.clone(),
            uploader,
            seeders: AtomicU64::new(0),
            leechers: AtomicU64::new(0),
            downloads: AtomicU64::new(0),
            torrent_blob,
            image_blobs,
            created_at: Utc::now().timestamp(),
        };

        let created = {
            let mut lock = self.torrents.write();
            match lock.entry(meta.info_hash) {
                Entry::Vacant(v) => Some(v.insert(record).clone()),
                Entry::Occupied(_) => None,
            }
        };

        match created {
            Some(record) => {
                self.update_stats(StatsEvent::Torrents, 1);
                self.update_stats(StatsEvent::UploadsHandled, 1);
                if self.config.database.persistent {
                    self.add_torrent_update(record.info_hash, record.clone(), UpdatesAction::Add);
                }
                Ok(record)
            }
            None => {
                self.update_stats(StatsEvent::UploadsRejected, 1);
                Err(IndexError::DuplicateInfoHash)
            }
        }
    }

    /// Direct insert used by the database load path and tests. Does not
    /// touch the update queue.
    #[tracing::instrument(level = "debug")]
    pub fn add_torrent(&self, info_hash: InfoHash, torrent_record: TorrentRecord) -> bool
    {
        let mut lock = self.torrents.write();
        match lock.entry(info_hash) {
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Torrents, 1);
                v.insert(torrent_record);
                true
            }
            Entry::Occupied(mut o) => {
                o.insert(torrent_record);
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_torrent(&self, info_hash: &InfoHash) -> Option<TorrentRecord>
    {
        let lock = self.torrents.read_recursive();
        lock.get(info_hash).cloned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_torrents(&self) -> BTreeMap<InfoHash, TorrentRecord>
    {
        let lock = self.torrents.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_torrent(&self, info_hash: &InfoHash) -> Option<TorrentRecord>
    {
        let removed = {
            let mut lock = self.torrents.write();
            lock.remove(info_hash)
        };
        if let Some(record) = removed {
            self.update_stats(StatsEvent::Torrents, -1);
            if self.config.database.persistent {
                self.add_torrent_update(*info_hash, record.clone(), UpdatesAction::Remove);
            }
            Some(record)
        } else {
            None
        }
    }

    /// Filtered, ordered, paginated catalog query.
    ///
    /// Text matches as a case-insensitive substring of the name; categories
    /// match by set membership. Both orderings break ties on the info hash
    /// so pages are stable across calls.
    #[tracing::instrument(level = "debug")]
    pub fn query_torrents(&self, text: Option<&str>, categories: Option<&[TorrentCategory]>, order: QueryOrder, page: u64, page_size: u64) -> PagedResult<TorrentRecord>
    {
        let needle = text.map(|t| t.to_lowercase());
        let mut matches: Vec<TorrentRecord> = {
            let lock = self.torrents.read_recursive();
            lock.values()
                .filter(|record| {
                    let text_hit = match &needle {
                        None => true,
                        Some(needle) => record.name.to_lowercase().contains(needle.as_str()),
                    };
                    let category_hit = match categories {
                        None => true,
                        Some(categories) => categories.contains(&record.category),
                    };
                    text_hit && category_hit
                })
                .cloned()
                .collect()
        };

        match order {
            QueryOrder::SeedersDesc => {
                matches.sort_by(|a, b| b.seeders_count().cmp(&a.seeders_count()).then(a.info_hash.cmp(&b.info_hash)));
            }
            QueryOrder::CreatedDesc => {
                matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.info_hash.cmp(&b.info_hash)));
            }
        }

        self.update_stats(StatsEvent::SearchesHandled, 1);

        let page = page.max(1);
        let page_size = page_size.max(1);
        let total = matches.len() as u64;
        let total_pages = total.div_ceil(page_size);
        let entries = matches
            .into_iter()
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .collect();

        PagedResult {
            entries,
            total,
            current_page: page,
            total_pages,
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn top_torrents(&self, category: Option<TorrentCategory>, limit: u64) -> Vec<TorrentRecord>
    {
        let mut matches: Vec<TorrentRecord> = {
            let lock = self.torrents.read_recursive();
            lock.values()
                .filter(|record| category.is_none_or(|category| record.category == category))
                .cloned()
                .collect()
        };
        matches.sort_by(|a, b| b.seeders_count().cmp(&a.seeders_count()).then(a.info_hash.cmp(&b.info_hash)));
        matches.truncate(limit as usize);
        matches
    }

    /// Single best match by seeder count, or none.
    #[tracing::instrument(level = "debug")]
    pub fn lucky_torrent(&self, text: Option<&str>) -> Option<TorrentRecord>
    {
        self.update_stats(StatsEvent::LuckySearchesHandled, 1);
        let needle = text.map(|t| t.to_lowercase());
        let lock = self.torrents.read_recursive();
        lock.values()
            .filter(|record| match &needle {
                None => true,
                Some(needle) => record.name.to_lowercase().contains(needle.as_str()),
            })
            .max_by(|a, b| a.seeders_count().cmp(&b.seeders_count()).then(b.info_hash.cmp(&a.info_hash)))
            .cloned()
    }

    /// Bumps the download and leecher counters by one.
    ///
    /// Runs under the shared read lock with atomic adds, so concurrent
    /// bumps on the same record all land. Returns the new counter values.
    #[tracing::instrument(level = "debug")]
    pub fn track_download(&self, info_hash: &InfoHash) -> Option<(u64, u64)>
    {
        let counters = {
            let lock = self.torrents.read_recursive();
            match lock.get(info_hash) {
                None => None,
                Some(record) => {
                    let downloads = record.downloads.fetch_add(1, Ordering::SeqCst) + 1;
                    let leechers = record.leechers.fetch_add(1, Ordering::SeqCst) + 1;
                    Some((downloads, leechers, record.clone()))
                }
            }
        };
        match counters {
            None => None,
            Some((downloads, leechers, record)) => {
                self.update_stats(StatsEvent::DownloadsTracked, 1);
                if self.config.database.persistent {
                    self.add_torrent_update(*info_hash, record, UpdatesAction::Update);
                }
                Some((downloads, leechers))
            }
        }
    }
}
