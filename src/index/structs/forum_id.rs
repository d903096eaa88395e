use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a forum.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ForumId(pub Uuid);
