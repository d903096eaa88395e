use serde::{Deserialize, Serialize};

/// Blob kinds, each mapped to its own subdirectory under the uploads root.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BlobKind {
    Torrents,
    Images,
}
