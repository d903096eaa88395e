//! Core torrent index and forum implementation.
//!
//! This module contains the main catalog logic: torrent ingestion and
//! de-duplication, filtered and paginated queries, the user identity and
//! relationship graph, forums with threads and posts, and the derived
//! statistics computed at read time.
//!
//! # Architecture
//!
//! All live state is held in memory behind `parking_lot` RwLocks on the
//! central [`structs::torrent_index::TorrentIndex`] struct. Mutations feed
//! nanosecond-keyed update queues that a background task drains into the
//! configured database, so request handling never waits on persistence.
//!
//! When a method touches more than one store it takes the locks in a fixed
//! order: forums, then threads, then posts. Users and torrents are never
//! held together with the forum locks.
//!
//! # Main Components
//!
//! - `TorrentIndex` - The central index instance
//! - `InfoHash` - 20-byte torrent identifier and catalog key
//! - `TorrentRecord` - Catalog entry with atomic peer/download counters
//! - `UserRecord` - Account with follow graph and bookmark set
//! - `ForumRecord` / `ThreadRecord` / `PostRecord` - Forum hierarchy

pub mod enums;
pub mod impls;
pub mod structs;

#[cfg(test)]
pub mod tests;
