//! Implementations for index structures and operations.
//!
//! The `torrent_index_*` files split the central struct's operations by
//! store: torrents, users, forums, threads and posts each get one file for
//! live operations and one for their write-behind update queue, plus one
//! file for the cross-store read-time aggregations.

/// Display, parsing and serde for the info hash.
pub mod info_hash;

/// Generation, display and parsing for user ids.
pub mod user_id;

/// Generation, display and parsing for forum ids.
pub mod forum_id;

/// Generation, display and parsing for thread ids.
pub mod thread_id;

/// Generation, display and parsing for post ids.
pub mod post_id;

/// Status mapping and conversions for the error taxonomy.
pub mod index_error;

/// Parsing and display for catalog categories.
pub mod torrent_category;

/// Parsing and display for user roles.
pub mod user_role;

/// Parsing and display for forum kinds.
pub mod forum_kind;

/// Counter snapshotting for stored catalog entries.
pub mod torrent_record;

/// Placeholder construction for dangling user references.
pub mod user_summary;

/// Constructor for the central index instance.
pub mod torrent_index;

/// Catalog operations: ingestion, queries, counters, removal.
pub mod torrent_index_torrents;

/// Write-behind queue for catalog mutations.
pub mod torrent_index_torrents_updates;

/// Account operations: registration, authentication, relationships.
pub mod torrent_index_users;

/// Write-behind queue for account mutations.
pub mod torrent_index_users_updates;

/// Forum operations.
pub mod torrent_index_forums;

/// Write-behind queue for forum mutations.
pub mod torrent_index_forums_updates;

/// Thread operations, including the compound create with opening post.
pub mod torrent_index_threads;

/// Write-behind queue for thread mutations.
pub mod torrent_index_threads_updates;

/// Post operations, including the locked-thread gate.
pub mod torrent_index_posts;

/// Write-behind queue for post mutations.
pub mod torrent_index_posts_updates;

/// Cross-store read-time aggregations: profiles, stats, summaries.
pub mod torrent_index_aggregates;
