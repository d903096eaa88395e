use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_record::ForumRecord;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;
use async_trait::async_trait;
use sqlx::Error;
use std::collections::BTreeMap;
use std::sync::Arc;

#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn load_torrents(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>;

    async fn load_users(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>;

    async fn load_forums(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>;

    async fn load_threads(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>;

    async fn load_posts(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>;

    async fn save_torrents(
        &self,
        torrent_index: Arc<TorrentIndex>,
        torrents: BTreeMap<InfoHash, (TorrentRecord, UpdatesAction)>,
    ) -> Result<(), Error>;

    async fn save_users(
        &self,
        torrent_index: Arc<TorrentIndex>,
        users: BTreeMap<UserId, (UserRecord, UpdatesAction)>,
    ) -> Result<(), Error>;

    async fn save_forums(
        &self,
        torrent_index: Arc<TorrentIndex>,
        forums: BTreeMap<ForumId, (ForumRecord, UpdatesAction)>,
    ) -> Result<(), Error>;

    async fn save_threads(
        &self,
        torrent_index: Arc<TorrentIndex>,
        threads: BTreeMap<ThreadId, (ThreadRecord, UpdatesAction)>,
    ) -> Result<(), Error>;

    async fn save_posts(
        &self,
        torrent_index: Arc<TorrentIndex>,
        posts: BTreeMap<PostId, (PostRecord, UpdatesAction)>,
    ) -> Result<(), Error>;
}
