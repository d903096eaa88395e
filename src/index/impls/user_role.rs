use std::fmt;
use std::fmt::Formatter;
use crate::index::enums::index_error::IndexError;
use crate::index::enums::user_role::UserRole;

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Moderator => "moderator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(UserRole::Member),
            "moderator" => Ok(UserRole::Moderator),
            other => Err(IndexError::ValidationError(format!("unknown role: {other}"))),
        }
    }
}
