use serde::Serialize;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::user_summary::UserSummary;

/// Single thread with its forum name and author resolved.
#[derive(Serialize, Clone, Debug)]
pub struct ThreadView {
    pub id: ThreadId,
    pub forum_id: ForumId,
    pub forum_name: String,
    pub title: String,
    pub author: UserSummary,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
