use serde::Serialize;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::user_id::UserId;

/// One stored thread.
///
/// `updated_at` is the last-activity timestamp, bumped whenever a post is
/// added; forum listings order by it. A locked thread accepts no new posts.
/// `author` is a weak reference resolved at read time.
#[derive(Serialize, Clone, Debug)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub forum_id: ForumId,
    pub title: String,
    pub author: UserId,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
