use serde::{Deserialize, Serialize};

/// Query string of `GET /api/torrents/lucky`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LuckyQuery {
    pub q: Option<String>,
}
