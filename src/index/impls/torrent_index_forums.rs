use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_map::Entry;
use std::sync::Arc;
use chrono::Utc;
use log::{error, info};
use crate::index::enums::forum_kind::ForumKind;
use crate::index::enums::index_error::IndexError;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_record::ForumRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub async fn load_forums(&self, torrent_index: Arc<TorrentIndex>)
    {
        if let Ok(forums) = self.sqlx.load_forums(torrent_index).await {
            info!("Loaded {forums} forums");
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_forums(&self, torrent_index: Arc<TorrentIndex>, forums: BTreeMap<ForumId, (ForumRecord, UpdatesAction)>) -> Result<(), ()>
    {
        let forums_len = forums.len();
        match self.sqlx.save_forums(torrent_index, forums).await {
            Ok(_) => {
                info!("[SYNC FORUMS] Synced {forums_len} forums");
                Ok(())
            }
            Err(_) => {
                error!("[SYNC FORUMS] Unable to sync {forums_len} forums");
                Err(())
            }
        }
    }

    /// Creates a forum. Names are unique across the store.
    #[tracing::instrument(level = "debug")]
    pub fn create_forum(&self, name: &str, description: &str, kind: ForumKind) -> Result<ForumRecord, IndexError>
    {
        if name.trim().is_empty() {
            return Err(IndexError::ValidationError("forum name must not be empty".to_string()));
        }
        if description.trim().is_empty() {
            return Err(IndexError::ValidationError("forum description must not be empty".to_string()));
        }

        let record = {
            let mut lock = self.forums.write();
            if lock.values().any(|forum| forum.name == name) {
                return Err(IndexError::ValidationError("a forum with this name already exists".to_string()));
            }
            let record = ForumRecord {
                id: ForumId::generate(),
                name: name.to_string(),
                description: description.to_string(),
                kind,
                created_at: Utc::now().timestamp(),
            };
            lock.insert(record.id, record.clone());
            record
        };

        self.update_stats(StatsEvent::Forums, 1);
        if self.config.database.persistent {
            self.add_forum_update(record.id, record.clone(), UpdatesAction::Add);
        }
        Ok(record)
    }

    /// Direct insert used by the database load path and tests. Does not
    /// touch the update queue.
    #[tracing::instrument(level = "debug")]
    pub fn add_forum(&self, forum_id: ForumId, forum_record: ForumRecord) -> bool
    {
        let mut lock = self.forums.write();
        match lock.entry(forum_id) {
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Forums, 1);
                v.insert(forum_record);
                true
            }
            Entry::Occupied(mut o) => {
                o.insert(forum_record);
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_forum(&self, forum_id: ForumId) -> Option<ForumRecord>
    {
        let lock = self.forums.read_recursive();
        lock.get(&forum_id).cloned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_forums(&self) -> BTreeMap<ForumId, ForumRecord>
    {
        let lock = self.forums.read_recursive();
        lock.clone()
    }

    /// Removes a forum together with all its threads and their posts.
    /// Returns the removed forum and how many threads and posts went with
    /// it.
    #[tracing::instrument(level = "debug")]
    pub fn remove_forum(&self, forum_id: ForumId) -> Option<(ForumRecord, u64, u64)>
    {
        let (record, removed_threads, removed_posts) = {
            let mut forums = self.forums.write();
            let record = forums.remove(&forum_id)?;
            let mut threads = self.threads.write();
            let mut posts = self.posts.write();

            let thread_ids: BTreeSet<_> = threads
                .iter()
                .filter(|(_, thread)| thread.forum_id == forum_id)
                .map(|(thread_id, _)| *thread_id)
                .collect();
            let mut removed_threads = Vec::with_capacity(thread_ids.len());
            for thread_id in &thread_ids {
                if let Some(thread) = threads.remove(thread_id) {
                    removed_threads.push(thread);
                }
            }

            let post_ids: Vec<_> = posts
                .iter()
                .filter(|(_, post)| thread_ids.contains(&post.thread_id))
                .map(|(post_id, _)| *post_id)
                .collect();
            let mut removed_posts = Vec::with_capacity(post_ids.len());
            for post_id in post_ids {
                if let Some(post) = posts.remove(&post_id) {
                    removed_posts.push(post);
                }
            }

            (record, removed_threads, removed_posts)
        };

        self.update_stats(StatsEvent::Forums, -1);
        self.update_stats(StatsEvent::Threads, -(removed_threads.len() as i64));
        self.update_stats(StatsEvent::Posts, -(removed_posts.len() as i64));

        let threads_removed = removed_threads.len() as u64;
        let posts_removed = removed_posts.len() as u64;
        if self.config.database.persistent {
            self.add_forum_update(forum_id, record.clone(), UpdatesAction::Remove);
            for thread in removed_threads {
                self.add_thread_update(thread.id, thread, UpdatesAction::Remove);
            }
            for post in removed_posts {
                self.add_post_update(post.id, post, UpdatesAction::Remove);
            }
        }

        Some((record, threads_removed, posts_removed))
    }
}
