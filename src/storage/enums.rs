//! Storage enumerations.

/// The kinds of blobs kept on disk.
pub mod blob_kind;

/// Errors produced by blob storage operations.
pub mod storage_error;
