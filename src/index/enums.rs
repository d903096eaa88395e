//! Enumerations for index operations.
//!
//! This module contains enum definitions for catalog categories, user roles,
//! forum kinds, query orderings, database update actions and the error
//! taxonomy returned by index operations.

/// Error taxonomy for every fallible index operation.
///
/// Each variant maps to one HTTP status class so handlers can convert
/// errors without inspecting them case by case.
pub mod index_error;

/// Fixed set of catalog categories a torrent is filed under.
pub mod torrent_category;

/// Account role controlling access to moderation operations.
pub mod user_role;

/// Forum grouping kind (discussion forum, FAQ or guide listing).
pub mod forum_kind;

/// Result orderings supported by catalog queries.
pub mod query_order;

/// Database update actions for the write-behind queues.
///
/// - `Add` - Insert a new record
/// - `Remove` - Delete an existing record
/// - `Update` - Modify an existing record
pub mod updates_action;
