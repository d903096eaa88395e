use serde::{Deserialize, Serialize};

/// Query string of `GET /api/torrents`, all fields optional.
/// Categories arrive as a comma separated list of category names.
#[derive(Debug, Serialize, Deserialize)]
pub struct TorrentListQuery {
    pub q: Option<String>,
    pub categories: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}
