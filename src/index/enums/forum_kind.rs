use serde::{Deserialize, Serialize};

/// Which listing a forum appears under. Purely a grouping attribute, the
/// behavior of threads and posts is identical across kinds.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ForumKind {
    #[default]
    Forum,
    Faq,
    Guide,
}
