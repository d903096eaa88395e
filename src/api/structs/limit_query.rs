use serde::{Deserialize, Serialize};

/// Query string of `GET /api/threads/recent`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}
