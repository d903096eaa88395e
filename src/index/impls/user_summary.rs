use crate::index::structs::user_record::UserRecord;
use crate::index::structs::user_summary::UserSummary;

/// Placeholder shown wherever an author or uploader no longer resolves.
pub const DELETED_USER: &str = "Deleted User";

impl UserSummary {
    pub fn deleted() -> UserSummary {
        UserSummary {
            id: None,
            username: DELETED_USER.to_string(),
        }
    }
}

impl From<&UserRecord> for UserSummary {
    fn from(user: &UserRecord) -> UserSummary {
        UserSummary {
            id: Some(user.id),
            username: user.username.clone(),
        }
    }
}
