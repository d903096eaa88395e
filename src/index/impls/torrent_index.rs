use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::blob_storage::BlobStorage;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> TorrentIndex
    {
        TorrentIndex {
            config: config.clone(),
            torrents: Arc::new(RwLock::new(BTreeMap::new())),
            torrents_updates: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(BTreeMap::new())),
            users_updates: Arc::new(RwLock::new(HashMap::new())),
            forums: Arc::new(RwLock::new(BTreeMap::new())),
            forums_updates: Arc::new(RwLock::new(HashMap::new())),
            threads: Arc::new(RwLock::new(BTreeMap::new())),
            threads_updates: Arc::new(RwLock::new(HashMap::new())),
            posts: Arc::new(RwLock::new(BTreeMap::new())),
            posts_updates: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                timestamp_run_save: AtomicI64::new(0),
                timestamp_run_console: AtomicI64::new(0),
                torrents: AtomicI64::new(0),
                torrents_updates: AtomicI64::new(0),
                users: AtomicI64::new(0),
                users_updates: AtomicI64::new(0),
                forums: AtomicI64::new(0),
                forums_updates: AtomicI64::new(0),
                threads: AtomicI64::new(0),
                threads_updates: AtomicI64::new(0),
                posts: AtomicI64::new(0),
                posts_updates: AtomicI64::new(0),
                searches_handled: AtomicI64::new(0),
                lucky_searches_handled: AtomicI64::new(0),
                downloads_tracked: AtomicI64::new(0),
                uploads_handled: AtomicI64::new(0),
                uploads_rejected: AtomicI64::new(0),
                registrations_handled: AtomicI64::new(0),
                logins_handled: AtomicI64::new(0),
                logins_failed: AtomicI64::new(0),
                api_handled: AtomicI64::new(0),
                api_not_found: AtomicI64::new(0),
                api_failure: AtomicI64::new(0),
                api_unauthorized: AtomicI64::new(0),
            }),
            storage: BlobStorage::new(config.clone()),
            sqlx: DatabaseConnector::new(config.clone(), create_database).await,
        }
    }
}
