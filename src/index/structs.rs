//! Data structures for the torrent index and forum.
//!
//! This module contains all the struct definitions used throughout the
//! index, including identifier newtypes, the stored record types, and the
//! read-time view types assembled for API responses.

/// Main index instance struct.
///
/// The central struct that holds all index state including configuration,
/// database connection, blob storage, the five record stores and their
/// write-behind update queues, and statistics.
pub mod torrent_index;

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` that implements common traits for use as
/// a map key and for serialization.
pub mod info_hash;

/// Identifier of a user account.
pub mod user_id;

/// Identifier of a forum.
pub mod forum_id;

/// Identifier of a thread.
pub mod thread_id;

/// Identifier of a post.
pub mod post_id;

/// Stored catalog entry for one torrent.
pub mod torrent_record;

/// Stored user account.
pub mod user_record;

/// Avatar image carried inside a user record.
pub mod user_avatar;

/// Stored forum.
pub mod forum_record;

/// Stored thread.
pub mod thread_record;

/// Stored post.
pub mod post_record;

/// One page of query results with its pagination envelope.
pub mod paged_result;

/// Minimal user reference resolved at read time.
///
/// Dangling references (author or uploader deleted after the content was
/// created) resolve to a "Deleted User" placeholder instead of failing.
pub mod user_summary;

/// Catalog entry with its uploader resolved, as served to clients.
pub mod torrent_view;

/// Bookmarked torrent reference inside a profile.
pub mod bookmark_view;

/// Derived per-user statistics.
pub mod user_stats;

/// Full profile with stats, bookmarks and the follow graph.
pub mod user_profile;

/// Author and timestamp of the latest post in a thread.
pub mod last_post;

/// Thread with its derived reply count and last-post summary.
pub mod thread_summary;

/// Single thread with its forum and author resolved.
pub mod thread_view;

/// Post with its author resolved and content rendered.
pub mod post_view;

/// Post as shown on its author's profile, with the thread title attached.
pub mod user_post_view;

/// Forum with its derived thread and post counts.
pub mod forum_summary;
