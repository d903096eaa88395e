use std::fmt;
use std::fmt::Formatter;
use crate::common::common::ordered_uuid;
use crate::index::structs::forum_id::ForumId;

impl ForumId {
    pub fn generate() -> ForumId {
        ForumId(ordered_uuid())
    }
}

impl fmt::Display for ForumId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for ForumId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ForumId(uuid::Uuid::parse_str(s)?))
    }
}
