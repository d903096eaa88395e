use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a post.
///
/// A v7 UUID, so post ids order chronologically: the smallest id in a
/// thread is its opening post and the largest is the latest reply.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PostId(pub Uuid);
