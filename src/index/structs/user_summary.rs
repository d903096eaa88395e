use serde::Serialize;
use crate::index::structs::user_id::UserId;

/// Minimal user reference embedded in listings and summaries.
///
/// `id` is absent when the referenced account no longer exists; the
/// username then carries the "Deleted User" placeholder.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Option<UserId>,
    pub username: String,
}
