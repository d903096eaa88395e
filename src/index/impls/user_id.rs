use std::fmt;
use std::fmt::Formatter;
use crate::common::common::ordered_uuid;
use crate::index::structs::user_id::UserId;

impl UserId {
    pub fn generate() -> UserId {
        UserId(ordered_uuid())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(uuid::Uuid::parse_str(s)?))
    }
}
