use serde::Serialize;
use crate::index::structs::post_id::PostId;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::user_id::UserId;

/// One stored post.
///
/// `content` is the raw BBCode as submitted; rendering happens at read
/// time so rule changes apply retroactively. The post with the smallest id
/// in a thread is the thread's opening post.
#[derive(Serialize, Clone, Debug)]
pub struct PostRecord {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub author: UserId,
    pub content: String,
    pub created_at: i64,
}
