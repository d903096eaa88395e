//! Implementation blocks for blob storage.

/// Store, read, delete and naming logic for `BlobStorage`.
pub mod blob_storage;
