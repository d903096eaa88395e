use std::fmt;
use std::fmt::Formatter;
use crate::common::common::ordered_uuid;
use crate::index::structs::post_id::PostId;

impl PostId {
    pub fn generate() -> PostId {
        PostId(ordered_uuid())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PostId(uuid::Uuid::parse_str(s)?))
    }
}
