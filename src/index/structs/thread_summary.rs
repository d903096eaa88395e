use serde::Serialize;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::last_post::LastPost;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::user_summary::UserSummary;

/// Thread as shown in a forum listing.
///
/// `reply_count` is the post count minus the opening post, floored at
/// zero. `last_post` is absent while only the opening post exists.
#[derive(Serialize, Clone, Debug)]
pub struct ThreadSummary {
    pub id: ThreadId,
    pub forum_id: ForumId,
    pub title: String,
    pub author: UserSummary,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub reply_count: u64,
    pub last_post: Option<LastPost>,
}
