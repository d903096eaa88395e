//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific metric that can be incremented
/// or set. Used with `TorrentIndex::update_stats()` to update counters.
///
/// # Categories
///
/// - **Store Metrics**: Torrents, Users, Forums, Threads, Posts plus their `*Updates` queues
/// - **Activity Metrics**: Searches, downloads, uploads, registrations, logins
/// - **API Metrics**: ApiHandled, ApiNotFound, ApiFailure, ApiUnauthorized
///
/// # Example
///
/// ```rust,ignore
/// use harbor_actix::stats::enums::stats_event::StatsEvent;
///
/// // Increment download counter
/// index.update_stats(StatsEvent::DownloadsTracked, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    Torrents,
    TorrentsUpdates,
    Users,
    UsersUpdates,
    Forums,
    ForumsUpdates,
    Threads,
    ThreadsUpdates,
    Posts,
    PostsUpdates,
    TimestampSave,
    TimestampConsole,
    SearchesHandled,
    LuckySearchesHandled,
    DownloadsTracked,
    UploadsHandled,
    UploadsRejected,
    RegistrationsHandled,
    LoginsHandled,
    LoginsFailed,
    ApiHandled,
    ApiNotFound,
    ApiFailure,
    ApiUnauthorized,
}
