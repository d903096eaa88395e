use serde::Serialize;
use crate::index::enums::forum_kind::ForumKind;
use crate::index::structs::forum_id::ForumId;

/// One stored forum. Forum names are unique across the store.
#[derive(Serialize, Clone, Debug)]
pub struct ForumRecord {
    pub id: ForumId,
    pub name: String,
    pub description: String,
    pub kind: ForumKind,
    pub created_at: i64,
}
