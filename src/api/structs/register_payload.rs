use serde::{Deserialize, Serialize};

/// Body of `POST /api/users/register`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}
