use serde::{Deserialize, Serialize};

/// Body of `PUT /api/users/profile/{username}/role`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RolePayload {
    pub role: String,
}
