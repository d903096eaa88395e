use serde::Serialize;
use crate::index::structs::post_id::PostId;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::user_summary::UserSummary;

/// Post as served inside a thread page.
///
/// `content` is the rendered markup, not the stored BBCode.
/// `author_since` is the author's registration timestamp, shown next to
/// the post; absent when the account no longer exists.
#[derive(Serialize, Clone, Debug)]
pub struct PostView {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub author: UserSummary,
    pub author_since: Option<i64>,
    pub content: String,
    pub created_at: i64,
}
