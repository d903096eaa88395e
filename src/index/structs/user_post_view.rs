use serde::Serialize;
use crate::index::structs::post_id::PostId;
use crate::index::structs::thread_id::ThreadId;

/// Post as listed on its author's profile page.
#[derive(Serialize, Clone, Debug)]
pub struct UserPostView {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub thread_title: String,
    pub content: String,
    pub created_at: i64,
}
