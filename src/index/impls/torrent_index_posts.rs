use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use chrono::Utc;
use log::{error, info};
use crate::index::enums::index_error::IndexError;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::paged_result::PagedResult;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::user_id::UserId;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub async fn load_posts(&self, torrent_index: Arc<TorrentIndex>)
    {
        if let Ok(posts) = self.sqlx.load_posts(torrent_index).await {
            info!("Loaded {posts} posts");
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_posts(&self, torrent_index: Arc<TorrentIndex>, posts: BTreeMap<PostId, (PostRecord, UpdatesAction)>) -> Result<(), ()>
    {
        let posts_len = posts.len();
        match self.sqlx.save_posts(torrent_index, posts).await {
            Ok(_) => {
                info!("[SYNC POSTS] Synced {posts_len} posts");
                Ok(())
            }
            Err(_) => {
                error!("[SYNC POSTS] Unable to sync {posts_len} posts");
                Err(())
            }
        }
    }

    /// Appends a reply to a thread. A locked thread rejects the reply
    /// before anything is written. Replying bumps the thread's activity
    /// timestamp.
    #[tracing::instrument(level = "debug")]
    pub fn create_post(&self, thread_id: ThreadId, author: UserId, content: &str) -> Result<PostRecord, IndexError>
    {
        if content.trim().is_empty() {
            return Err(IndexError::ValidationError("post content must not be empty".to_string()));
        }

        let now = Utc::now().timestamp();
        let (thread_record, post_record) = {
            let mut threads = self.threads.write();
            let thread = threads.get_mut(&thread_id).ok_or(IndexError::NotFound("thread".to_string()))?;
            if thread.locked {
                return Err(IndexError::ThreadLocked);
            }
            thread.updated_at = now;
            let thread_record = thread.clone();
            let post_record = PostRecord {
                id: PostId::generate(),
                thread_id,
                author,
                content: content.to_string(),
                created_at: now,
            };
            let mut posts = self.posts.write();
            posts.insert(post_record.id, post_record.clone());
            (thread_record, post_record)
        };

        self.update_stats(StatsEvent::Posts, 1);
        if self.config.database.persistent {
            self.add_post_update(post_record.id, post_record.clone(), UpdatesAction::Add);
            self.add_thread_update(thread_id, thread_record, UpdatesAction::Update);
        }
        Ok(post_record)
    }

    /// Direct insert used by the database load path and tests. Does not
    /// touch the update queue.
    #[tracing::instrument(level = "debug")]
    pub fn add_post(&self, post_id: PostId, post_record: PostRecord) -> bool
    {
        let mut lock = self.posts.write();
        match lock.entry(post_id) {
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Posts, 1);
                v.insert(post_record);
                true
            }
            Entry::Occupied(mut o) => {
                o.insert(post_record);
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_post(&self, post_id: PostId) -> Option<PostRecord>
    {
        let lock = self.posts.read_recursive();
        lock.get(&post_id).cloned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_posts(&self) -> BTreeMap<PostId, PostRecord>
    {
        let lock = self.posts.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_post(&self, post_id: PostId) -> Option<PostRecord>
    {
        let record = {
            let mut lock = self.posts.write();
            lock.remove(&post_id)?
        };

        self.update_stats(StatsEvent::Posts, -1);
        if self.config.database.persistent {
            self.add_post_update(post_id, record.clone(), UpdatesAction::Remove);
        }
        Some(record)
    }

    /// One page of a thread's posts in posting order. Ids are time
    /// ordered, so the map's own ordering is the chronological one.
    #[tracing::instrument(level = "debug")]
    pub fn posts_in_thread(&self, thread_id: ThreadId, page: u64, page_size: u64) -> PagedResult<PostRecord>
    {
        let posts: Vec<PostRecord> = {
            let lock = self.posts.read_recursive();
            lock.values().filter(|post| post.thread_id == thread_id).cloned().collect()
        };

        let page = page.max(1);
        let page_size = page_size.max(1);
        let total = posts.len() as u64;
        let total_pages = total.div_ceil(page_size);
        let entries = posts
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
    pub fn thread_post_count(&self, thread_id: ThreadId) -> u64
    {
        let lock = self.posts.read_recursive();
        lock.values().filter(|post| post.thread_id == thread_id).count() as u64
    }

    /// All posts by one author, newest first.
    #[tracing::instrument(level = "debug")]
    pub fn posts_by_user(&self, user_id: UserId) -> Vec<PostRecord>
    {
        let mut posts: Vec<PostRecord> = {
            let lock = self.posts.read_recursive();
            lock.values().filter(|post| post.author == user_id).cloned().collect()
        };
        posts.reverse();
        posts
    }
}
