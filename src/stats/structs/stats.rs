use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of all statistics counters.
///
/// Produced by `TorrentIndex::get_stats()` and serialized as-is by the
/// `/api/stats` endpoint and the periodic console logger.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_save: i64,
    pub timestamp_run_console: i64,
    pub torrents: i64,
    pub torrents_updates: i64,
    pub users: i64,
    pub users_updates: i64,
    pub forums: i64,
    pub forums_updates: i64,
    pub threads: i64,
    pub threads_updates: i64,
    pub posts: i64,
    pub posts_updates: i64,
    pub searches_handled: i64,
    pub lucky_searches_handled: i64,
    pub downloads_tracked: i64,
    pub uploads_handled: i64,
    pub uploads_rejected: i64,
    pub registrations_handled: i64,
    pub logins_handled: i64,
    pub logins_failed: i64,
    pub api_handled: i64,
    pub api_not_found: i64,
    pub api_failure: i64,
    pub api_unauthorized: i64,
}
