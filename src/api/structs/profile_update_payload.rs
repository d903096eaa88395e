use serde::{Deserialize, Serialize};

/// Body of `PUT /api/users/profile`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileUpdatePayload {
    pub email: String,
}
