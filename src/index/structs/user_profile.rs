use serde::Serialize;
use crate::index::structs::bookmark_view::BookmarkView;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_stats::UserStats;
use crate::index::structs::user_summary::UserSummary;

/// Full public profile.
///
/// `followers` is the inverse of the stored `following` sets, computed per
/// read. `is_following` relates the profile to the authenticated viewer and
/// is false when the request carries no identity.
#[derive(Serialize, Clone, Debug)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub created_at: i64,
    pub bookmarks: Vec<BookmarkView>,
    pub following: Vec<UserSummary>,
    pub followers: Vec<UserSummary>,
    pub is_following: bool,
    pub stats: UserStats,
}
