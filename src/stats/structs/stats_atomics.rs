use std::sync::atomic::AtomicI64;
use serde::{Deserialize, Serialize};

/// Live statistics counters shared across all worker threads.
///
/// Every counter is an `AtomicI64` so handlers update them without taking
/// any lock. `TorrentIndex::get_stats()` turns this into a `Stats` snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_save: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub torrents: AtomicI64,
    pub torrents_updates: AtomicI64,
    pub users: AtomicI64,
    pub users_updates: AtomicI64,
    pub forums: AtomicI64,
    pub forums_updates: AtomicI64,
    pub threads: AtomicI64,
    pub threads_updates: AtomicI64,
    pub posts: AtomicI64,
    pub posts_updates: AtomicI64,
    pub searches_handled: AtomicI64,
    pub lucky_searches_handled: AtomicI64,
    pub downloads_tracked: AtomicI64,
    pub uploads_handled: AtomicI64,
    pub uploads_rejected: AtomicI64,
    pub registrations_handled: AtomicI64,
    pub logins_handled: AtomicI64,
    pub logins_failed: AtomicI64,
    pub api_handled: AtomicI64,
    pub api_not_found: AtomicI64,
    pub api_failure: AtomicI64,
    pub api_unauthorized: AtomicI64,
}
