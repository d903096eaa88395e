use serde::Serialize;

/// Derived per-user statistics, computed at read time and never stored.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserStats {
    pub uploads: u64,
    pub posts: u64,
    pub total_downloads: u64,
}
