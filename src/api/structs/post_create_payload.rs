use serde::{Deserialize, Serialize};

/// Body of `POST /api/threads/{id}/posts`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostCreatePayload {
    pub content: String,
}
