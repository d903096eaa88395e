use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use chrono::Utc;
use log::{error, info};
use crate::index::enums::index_error::IndexError;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::user_id::UserId;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub async fn load_threads(&self, torrent_index: Arc<TorrentIndex>)
    {
        if let Ok(threads) = self.sqlx.load_threads(torrent_index).await {
            info!("Loaded {threads} threads");
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_threads(&self, torrent_index: Arc<TorrentIndex>, threads: BTreeMap<ThreadId, (ThreadRecord, UpdatesAction)>) -> Result<(), ()>
    {
        let threads_len = threads.len();
        match self.sqlx.save_threads(torrent_index, threads).await {
            Ok(_) => {
                info!("[SYNC THREADS] Synced {threads_len} threads");
                Ok(())
            }
            Err(_) => {
                error!("[SYNC THREADS] Unable to sync {threads_len} threads");
                Err(())
            }
        }
    }

    /// Creates a thread together with its opening post. The two records
    /// appear in the same critical section, so no reader ever sees a
    /// thread without its first post.
    #[tracing::instrument(level = "debug")]
    pub fn create_thread(&self, forum_id: ForumId, author: UserId, title: &str, content: &str) -> Result<(ThreadRecord, PostRecord), IndexError>
    {
        if title.trim().is_empty() {
            return Err(IndexError::ValidationError("thread title must not be empty".to_string()));
        }
        if content.trim().is_empty() {
            return Err(IndexError::ValidationError("post content must not be empty".to_string()));
        }

        let now = Utc::now().timestamp();
        let thread_record = ThreadRecord {
            id: ThreadId::generate(),
            forum_id,
            title: title.to_string(),
            author,
            locked: false,
            created_at: now,
            updated_at: now,
        };
        let post_record = PostRecord {
            id: PostId::generate(),
            thread_id: thread_record.id,
            author,
            content: content.to_string(),
            created_at: now,
        };

        {
            let forums = self.forums.read_recursive();
            if !forums.contains_key(&forum_id) {
                return Err(IndexError::NotFound("forum".to_string()));
            }
            let mut threads = self.threads.write();
            let mut posts = self.posts.write();
            threads.insert(thread_record.id, thread_record.clone());
            posts.insert(post_record.id, post_record.clone());
        }

        self.update_stats(StatsEvent::Threads, 1);
        self.update_stats(StatsEvent::Posts, 1);
        if self.config.database.persistent {
            self.add_thread_update(thread_record.id, thread_record.clone(), UpdatesAction::Add);
            self.add_post_update(post_record.id, post_record.clone(), UpdatesAction::Add);
        }
        Ok((thread_record, post_record))
    }

    /// Direct insert used by the database load path and tests. Does not
    /// touch the update queue.
    #[tracing::instrument(level = "debug")]
    pub fn add_thread(&self, thread_id: ThreadId, thread_record: ThreadRecord) -> bool
    {
        let mut lock = self.threads.write();
        match lock.entry(thread_id) {
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Threads, 1);
                v.insert(thread_record);
                true
            }
            Entry::Occupied(mut o) => {
                o.insert(thread_record);
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_thread(&self, thread_id: ThreadId) -> Option<ThreadRecord>
    {
        let lock = self.threads.read_recursive();
        lock.get(&thread_id).cloned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_threads(&self) -> BTreeMap<ThreadId, ThreadRecord>
    {
        let lock = self.threads.read_recursive();
        lock.clone()
    }

    /// Flips the lock flag and returns the new state.
    #[tracing::instrument(level = "debug")]
    pub fn toggle_thread_lock(&self, thread_id: ThreadId) -> Result<bool, IndexError>
    {
        let record = {
            let mut lock = self.threads.write();
            let record = lock.get_mut(&thread_id).ok_or(IndexError::NotFound("thread".to_string()))?;
            record.locked = !record.locked;
            record.clone()
        };

        if self.config.database.persistent {
            self.add_thread_update(thread_id, record.clone(), UpdatesAction::Update);
        }
        Ok(record.locked)
    }

    /// Removes a thread and all its posts. Returns the removed thread and
    /// the number of posts that went with it.
    #[tracing::instrument(level = "debug")]
    pub fn remove_thread(&self, thread_id: ThreadId) -> Option<(ThreadRecord, u64)>
    {
        let (record, removed_posts) = {
            let mut threads = self.threads.write();
            let record = threads.remove(&thread_id)?;
            let mut posts = self.posts.write();
            let post_ids: Vec<_> = posts
                .iter()
                .filter(|(_, post)| post.thread_id == thread_id)
                .map(|(post_id, _)| *post_id)
                .collect();
            let mut removed_posts = Vec::with_capacity(post_ids.len());
            for post_id in post_ids {
                if let Some(post) = posts.remove(&post_id) {
                    removed_posts.push(post);
                }
            }
            (record, removed_posts)
        };

        self.update_stats(StatsEvent::Threads, -1);
        self.update_stats(StatsEvent::Posts, -(removed_posts.len() as i64));

        let posts_removed = removed_posts.len() as u64;
        if self.config.database.persistent {
            self.add_thread_update(thread_id, record.clone(), UpdatesAction::Remove);
            for post in removed_posts {
                self.add_post_update(post.id, post, UpdatesAction::Remove);
            }
        }

        Some((record, posts_removed))
    }

    /// Threads of one forum, most recently active first.
    #[tracing::instrument(level = "debug")]
    pub fn threads_in_forum(&self, forum_id: ForumId) -> Vec<ThreadRecord>
    {
        let mut threads: Vec<ThreadRecord> = {
            let lock = self.threads.read_recursive();
            lock.values().filter(|thread| thread.forum_id == forum_id).cloned().collect()
        };
        threads.sort_by(|left, right| {
            right.updated_at.cmp(&left.updated_at).then_with(|| right.id.cmp(&left.id))
        });
        threads
    }

    /// Most recently active threads across all forums.
    #[tracing::instrument(level = "debug")]
    pub fn recent_threads(&self, limit: usize) -> Vec<ThreadRecord>
    {
        let mut threads: Vec<ThreadRecord> = {
            let lock = self.threads.read_recursive();
            lock.values().cloned().collect()
        };
        threads.sort_by(|left, right| {
            right.updated_at.cmp(&left.updated_at).then_with(|| right.id.cmp(&left.id))
        });
        threads.truncate(limit);
        threads
    }
}
