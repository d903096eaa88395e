use serde::{Deserialize, Serialize};

/// Query string of `GET /api/torrents/top`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopQuery {
    pub category: Option<String>,
}
