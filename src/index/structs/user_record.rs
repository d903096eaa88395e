use std::collections::BTreeSet;
use serde::Serialize;
use crate::index::enums::user_role::UserRole;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::user_avatar::UserAvatar;
use crate::index::structs::user_id::UserId;

/// One stored user account.
///
/// `following` holds the accounts this user follows; the inverse
/// ("followers") is never stored and is derived by scanning all users.
/// The password hash and the avatar blob never leave the process through
/// serialization, profile responses are assembled from view structs.
#[derive(Serialize, Clone, Debug)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub avatar: Option<UserAvatar>,
    pub following: BTreeSet<UserId>,
    pub bookmarks: BTreeSet<InfoHash>,
    pub created_at: i64,
}
