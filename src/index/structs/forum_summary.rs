use serde::Serialize;
use crate::index::enums::forum_kind::ForumKind;
use crate::index::structs::forum_id::ForumId;

/// Forum as shown in the forum overview, with derived counts.
#[derive(Serialize, Clone, Debug)]
pub struct ForumSummary {
    pub id: ForumId,
    pub name: String,
    pub description: String,
    pub kind: ForumKind,
    pub created_at: i64,
    pub threads: u64,
    pub posts: u64,
}
