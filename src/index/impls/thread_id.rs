use std::fmt;
use std::fmt::Formatter;
use crate::common::common::ordered_uuid;
use crate::index::structs::thread_id::ThreadId;

impl ThreadId {
    pub fn generate() -> ThreadId {
        ThreadId(ordered_uuid())
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for ThreadId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ThreadId(uuid::Uuid::parse_str(s)?))
    }
}
