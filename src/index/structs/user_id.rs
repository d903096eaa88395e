use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a user account.
///
/// Backed by a v7 UUID so account ids sort in creation order, which keeps
/// the users map iterable oldest-first without a separate sequence column.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct UserId(pub Uuid);
