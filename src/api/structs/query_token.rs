use serde::{Deserialize, Serialize};

/// Admin API key carried as `?token=` on administrative endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryToken {
    pub(crate) token: Option<String>,
}