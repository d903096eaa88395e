//! REST API module for the index, user and forum surfaces.
//!
//! This module provides the HTTP endpoints of the service: the torrent
//! catalog (search, top, lucky, upload, download tracking), user identity
//! (registration, login, profiles, follows, bookmarks, avatars) and the
//! forum pipeline (forums, threads, posts).
//!
//! # Endpoints Overview
//!
//! ## Statistics
//! - `GET /api/stats` - Service counters in JSON format (admin token)
//!
//! ## Torrents
//! - `GET /api/torrents` - Search the catalog, ordered by seeders
//! - `POST /api/torrents` - Upload a torrent (multipart, authenticated)
//! - `GET /api/torrents/recent` - Newest uploads first
//! - `GET /api/torrents/top` - Most downloaded, optionally per category
//! - `GET /api/torrents/lucky` - One random match
//! - `GET /api/torrents/{info_hash}` - Single catalog entry
//! - `DELETE /api/torrents/{info_hash}` - Remove an entry (admin token)
//! - `POST /api/torrents/{info_hash}/track` - Count a download
//!
//! ## Users
//! - `POST /api/users/register` - Create an account
//! - `POST /api/users/login` - Authenticate, returns a bearer token
//! - `PUT /api/users/profile` - Update own email
//! - `PUT /api/users/password` - Change own password
//! - `PUT /api/users/profile/avatar` - Upload own avatar (multipart)
//! - `GET /api/users/avatar/{user_id}` - Avatar bytes, default when unset
//! - `GET /api/users/profile/{username}` - Public profile with statistics
//! - `GET /api/users/profile/{username}/uploads` - Uploads of a user
//! - `GET /api/users/profile/{username}/posts` - Posts of a user
//! - `PUT|DELETE /api/users/profile/{username}/follow` - Follow graph
//! - `PUT /api/users/profile/{username}/role` - Set role (admin token)
//! - `PUT|DELETE /api/users/bookmarks/{info_hash}` - Bookmarks
//!
//! ## Forums
//! - `GET /api/forums` - All forums with thread/post counts
//! - `POST /api/forums` - Create a forum (moderator)
//! - `DELETE /api/forums/{forum_id}` - Remove a forum (moderator)
//! - `GET /api/forums/{forum_id}/threads` - Threads by last activity
//! - `POST /api/forums/{forum_id}/threads` - Start a thread with its opening post
//! - `GET /api/forums/{forum_id}/last-thread` - Most recently active thread
//!
//! ## Threads and Posts
//! - `GET /api/threads/recent` - Recently active threads across forums
//! - `GET /api/threads/{thread_id}` - Single thread
//! - `DELETE /api/threads/{thread_id}` - Remove a thread (moderator)
//! - `PUT /api/threads/{thread_id}/lock` - Toggle the lock (moderator)
//! - `GET /api/threads/{thread_id}/posts` - Rendered posts, paged
//! - `POST /api/threads/{thread_id}/posts` - Reply (authenticated)
//! - `DELETE /api/posts/{post_id}` - Remove a post (moderator)
//!
//! # Authentication
//!
//! User endpoints take a `Authorization: Bearer <jwt>` header obtained from
//! login or registration. Administrative endpoints take the configured API
//! key as a query parameter: `?token=<api_key>`.

/// Data structures for API service context and request payloads.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Forum management endpoints.
pub mod api_forums;

/// Statistics endpoint.
pub mod api_stats;

/// Thread and post endpoints.
pub mod api_threads;

/// Torrent catalog endpoints.
pub mod api_torrents;

/// User identity and social endpoints.
pub mod api_users;
