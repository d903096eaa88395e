use std::collections::HashMap;
use crate::bbcode::bbcode::render_bbcode;
use crate::index::structs::bookmark_view::BookmarkView;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_summary::ForumSummary;
use crate::index::structs::last_post::LastPost;
use crate::index::structs::paged_result::PagedResult;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::post_view::PostView;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::thread_summary::ThreadSummary;
use crate::index::structs::thread_view::ThreadView;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::index::structs::torrent_view::TorrentView;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_post_view::UserPostView;
use crate::index::structs::user_profile::UserProfile;
use crate::index::structs::user_stats::UserStats;
use crate::index::structs::user_summary::UserSummary;

impl TorrentIndex {
    /// Resolves a user reference for display. Records of deleted accounts
    /// keep their content, so missing authors resolve to a placeholder.
    #[tracing::instrument(level = "debug")]
    pub fn user_summary(&self, user_id: UserId) -> UserSummary
    {
        match self.get_user(user_id) {
            Some(user) => UserSummary::from(&user),
            None => UserSummary::deleted(),
        }
    }

    /// Derived per-user counters, computed from the live stores on every
    /// call rather than maintained as stored counts.
    #[tracing::instrument(level = "debug")]
    pub fn user_stats(&self, user_id: UserId) -> UserStats
    {
        let (uploads, total_downloads) = {
            let lock = self.torrents.read_recursive();
            let mut uploads = 0u64;
            let mut total_downloads = 0u64;
            for torrent in lock.values() {
                if torrent.uploader == user_id {
                    uploads += 1;
                    total_downloads += torrent.downloads_count();
                }
            }
            (uploads, total_downloads)
        };
        let posts = {
            let lock = self.posts.read_recursive();
            lock.values().filter(|post| post.author == user_id).count() as u64
        };
        UserStats { uploads, posts, total_downloads }
    }

    /// Inverse of the stored follow edges: everyone whose following set
    /// contains this user.
    #[tracing::instrument(level = "debug")]
    pub fn followers_of(&self, user_id: UserId) -> Vec<UserSummary>
    {
        let lock = self.users.read_recursive();
        lock.values()
            .filter(|user| user.following.contains(&user_id))
            .map(UserSummary::from)
            .collect()
    }

    #[tracing::instrument(level = "debug")]
    pub fn is_following(&self, viewer: UserId, target: UserId) -> bool
    {
        let lock = self.users.read_recursive();
        lock.get(&viewer).is_some_and(|user| user.following.contains(&target))
    }

    /// Full profile by username. Bookmarks whose torrent was removed are
    /// dropped from the listing instead of shown as broken entries.
    #[tracing::instrument(level = "debug")]
    pub fn user_profile(&self, username: &str, viewer: Option<UserId>) -> Option<UserProfile>
    {
        let record = self.get_user_by_username(username)?;
        let bookmarks = {
            let torrents = self.torrents.read_recursive();
            record.bookmarks
                .iter()
                .filter_map(|info_hash| {
                    torrents.get(info_hash).map(|torrent| BookmarkView {
                        info_hash: *info_hash,
                        name: torrent.name.clone(),
                        category: torrent.category,
                    })
                })
                .collect()
        };
        let following = record.following.iter().map(|followed| self.user_summary(*followed)).collect();
        let followers = self.followers_of(record.id);
        let is_following = viewer.is_some_and(|viewer_id| self.is_following(viewer_id, record.id));
        let stats = self.user_stats(record.id);
        Some(UserProfile {
            id: record.id,
            username: record.username.clone(),
            created_at: record.created_at,
            bookmarks,
            following,
            followers,
            is_following,
            stats,
        })
    }

    #[tracing::instrument(level = "debug")]
    pub fn torrent_view(&self, record: &TorrentRecord) -> TorrentView
    {
        TorrentView {
            info_hash: record.info_hash,
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category,
            total_size: record.total_size,
            files: record.files.clone(),
            uploader: self.user_summary(record.uploader),
            seeders: record.seeders_count(),
            leechers: record.leechers_count(),
            downloads: record.downloads_count(),
            created_at: record.created_at,
        }
    }

    /// A user's uploads, newest first.
    #[tracing::instrument(level = "debug")]
    pub fn uploads_by_user(&self, user_id: UserId) -> Vec<TorrentView>
    {
        let mut uploads: Vec<TorrentRecord> = {
            let lock = self.torrents.read_recursive();
            lock.values().filter(|torrent| torrent.uploader == user_id).cloned().collect()
        };
        uploads.sort_by(|left, right| {
            right.created_at.cmp(&left.created_at).then_with(|| right.info_hash.cmp(&left.info_hash))
        });
        uploads.iter().map(|record| self.torrent_view(record)).collect()
    }

    /// A user's forum posts, newest first, with the containing thread's
    /// title attached. Posts of removed threads are dropped.
    #[tracing::instrument(level = "debug")]
    pub fn user_post_views(&self, user_id: UserId) -> Vec<UserPostView>
    {
        let posts = self.posts_by_user(user_id);
        let threads = self.threads.read_recursive();
        posts
            .into_iter()
            .filter_map(|post| {
                threads.get(&post.thread_id).map(|thread| UserPostView {
                    id: post.id,
                    thread_id: post.thread_id,
                    thread_title: thread.title.clone(),
                    content: render_bbcode(&post.content),
                    created_at: post.created_at,
                })
            })
            .collect()
    }

    /// Forum listing of one forum: threads by latest activity, each with
    /// its reply count and latest reply.
    #[tracing::instrument(level = "debug")]
    pub fn threads_with_stats(&self, forum_id: ForumId) -> Vec<ThreadSummary>
    {
        let threads = self.threads_in_forum(forum_id);
        self.summarize_threads(threads)
    }

    /// Latest active threads across all forums, for the front page.
    #[tracing::instrument(level = "debug")]
    pub fn recent_thread_summaries(&self, limit: usize) -> Vec<ThreadSummary>
    {
        let threads = self.recent_threads(limit);
        self.summarize_threads(threads)
    }

    fn summarize_threads(&self, threads: Vec<ThreadRecord>) -> Vec<ThreadSummary>
    {
        let mut tallies: HashMap<ThreadId, (u64, Option<PostRecord>)> = HashMap::new();
        {
            let posts = self.posts.read_recursive();
            for post in posts.values() {
                let tally = tallies.entry(post.thread_id).or_insert((0, None));
                tally.0 += 1;
                // Ids ascend in posting order, so the final assignment per
                // thread is its newest post.
                tally.1 = Some(post.clone());
            }
        }

        threads
            .into_iter()
            .map(|thread| {
                let (count, newest) = tallies.remove(&thread.id).unwrap_or((0, None));
                let last_post = if count > 1 {
                    newest.map(|post| LastPost {
                        author: self.user_summary(post.author),
                        created_at: post.created_at,
                    })
                } else {
                    None
                };
                ThreadSummary {
                    id: thread.id,
                    forum_id: thread.forum_id,
                    title: thread.title,
                    author: self.user_summary(thread.author),
                    locked: thread.locked,
                    created_at: thread.created_at,
                    updated_at: thread.updated_at,
                    reply_count: count.saturating_sub(1),
                    last_post,
                }
            })
            .collect()
    }

    /// Single thread header with its forum name resolved.
    #[tracing::instrument(level = "debug")]
    pub fn thread_view(&self, thread_id: ThreadId) -> Option<ThreadView>
    {
        let thread = self.get_thread(thread_id)?;
        let forum_name = self.get_forum(thread.forum_id).map(|forum| forum.name)?;
        Some(ThreadView {
            id: thread.id,
            forum_id: thread.forum_id,
            forum_name,
            title: thread.title,
            author: self.user_summary(thread.author),
            locked: thread.locked,
            created_at: thread.created_at,
            updated_at: thread.updated_at,
        })
    }

    /// One page of a thread's posts with content rendered for display.
    /// Returns None when the thread itself does not exist.
    #[tracing::instrument(level = "debug")]
    pub fn thread_posts_page(&self, thread_id: ThreadId, page: u64, page_size: u64) -> Option<PagedResult<PostView>>
    {
        self.get_thread(thread_id)?;
        let paged = self.posts_in_thread(thread_id, page, page_size);
        let entries = paged.entries
            .into_iter()
            .map(|post| {
                let author_record = self.get_user(post.author);
                PostView {
                    id: post.id,
                    thread_id: post.thread_id,
                    author: author_record.as_ref().map(UserSummary::from).unwrap_or_else(UserSummary::deleted),
                    author_since: author_record.map(|author| author.created_at),
                    content: render_bbcode(&post.content),
                    created_at: post.created_at,
                }
            })
            .collect();
        Some(PagedResult {
            entries,
            total: paged.total,
            current_page: paged.current_page,
            total_pages: paged.total_pages,
        })
    }

    /// Forum overview with per-forum thread and post tallies.
    #[tracing::instrument(level = "debug")]
    pub fn forum_summaries(&self) -> Vec<ForumSummary>
    {
        let forums = self.get_forums();
        let mut thread_counts: HashMap<ForumId, u64> = HashMap::new();
        let mut post_counts: HashMap<ForumId, u64> = HashMap::new();
        {
            let threads = self.threads.read_recursive();
            let forum_of_thread: HashMap<ThreadId, ForumId> = threads
                .iter()
                .map(|(thread_id, thread)| (*thread_id, thread.forum_id))
                .collect();
            for forum_id in forum_of_thread.values() {
                *thread_counts.entry(*forum_id).or_insert(0) += 1;
            }
            let posts = self.posts.read_recursive();
            for post in posts.values() {
                if let Some(forum_id) = forum_of_thread.get(&post.thread_id) {
                    *post_counts.entry(*forum_id).or_insert(0) += 1;
                }
            }
        }

        forums
            .into_values()
            .map(|forum| {
                let threads = thread_counts.get(&forum.id).copied().unwrap_or(0);
                let posts = post_counts.get(&forum.id).copied().unwrap_or(0);
                ForumSummary {
                    id: forum.id,
                    name: forum.name,
                    description: forum.description,
                    kind: forum.kind,
                    created_at: forum.created_at,
                    threads,
                    posts,
                }
            })
            .collect()
    }
}
