use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_record::ForumRecord;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::blob_storage::BlobStorage;

/// Central index state shared across handlers and background tasks.
///
/// Each store pairs a live map with a write-behind update queue keyed by a
/// nanosecond timestamp; mutations enqueue `(key, record, action)` tuples
/// that the flush task drains into the database when persistence is on.
///
/// Lock order when a method takes more than one store: forums, threads,
/// posts. The users and torrents locks are never held together with them.
#[derive(Debug)]
pub struct TorrentIndex {
    pub config: Arc<Configuration>,
    pub torrents: Arc<RwLock<BTreeMap<InfoHash, TorrentRecord>>>,
    pub torrents_updates: Arc<RwLock<HashMap<u128, (InfoHash, TorrentRecord, UpdatesAction)>>>,
    pub users: Arc<RwLock<BTreeMap<UserId, UserRecord>>>,
    pub users_updates: Arc<RwLock<HashMap<u128, (UserId, UserRecord, UpdatesAction)>>>,
    pub forums: Arc<RwLock<BTreeMap<ForumId, ForumRecord>>>,
    pub forums_updates: Arc<RwLock<HashMap<u128, (ForumId, ForumRecord, UpdatesAction)>>>,
    pub threads: Arc<RwLock<BTreeMap<ThreadId, ThreadRecord>>>,
    pub threads_updates: Arc<RwLock<HashMap<u128, (ThreadId, ThreadRecord, UpdatesAction)>>>,
    pub posts: Arc<RwLock<BTreeMap<PostId, PostRecord>>>,
    pub posts_updates: Arc<RwLock<HashMap<u128, (PostId, PostRecord, UpdatesAction)>>>,
    pub stats: Arc<StatsAtomics>,
    pub storage: BlobStorage,
    pub sqlx: DatabaseConnector,
}
