use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a thread.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ThreadId(pub Uuid);
