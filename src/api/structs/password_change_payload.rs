use serde::{Deserialize, Serialize};

/// Body of `PUT /api/users/password`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordChangePayload {
    pub current_password: String,
    pub new_password: String,
}
