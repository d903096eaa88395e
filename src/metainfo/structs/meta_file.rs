use serde::{Deserialize, Serialize};

/// One file inside a torrent, with its path relative to the torrent root.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MetaFile {
    pub path: String,
    pub size: u64,
}
