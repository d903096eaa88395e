use serde::{Deserialize, Serialize};

/// Body of `POST /api/forums/{id}/threads`. The content becomes the
/// opening post of the new thread.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThreadCreatePayload {
    pub title: String,
    pub content: String,
}
