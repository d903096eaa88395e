use serde::{Deserialize, Serialize};

/// Body of `POST /api/users/login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}
