use serde::{Deserialize, Serialize};

/// Body of `POST /api/forums`. The kind defaults to a plain forum when
/// left out.
#[derive(Debug, Serialize, Deserialize)]
pub struct ForumCreatePayload {
    pub name: String,
    pub description: String,
    pub kind: Option<String>,
}
