use serde::{Deserialize, Serialize};

/// Query string of paged listings, `GET /api/threads/{id}/posts` among them.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}
