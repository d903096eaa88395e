//! Blob storage data structures.

/// Disk-backed blob store for uploaded files.
pub mod blob_storage;
