use serde::Serialize;
use crate::index::structs::user_summary::UserSummary;

/// Author and timestamp of the chronologically latest post in a thread.
#[derive(Serialize, Clone, Debug)]
pub struct LastPost {
    pub author: UserSummary,
    pub created_at: i64,
}
