use std::fmt;
use std::fmt::Formatter;
use crate::index::enums::forum_kind::ForumKind;
use crate::index::enums::index_error::IndexError;

impl ForumKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumKind::Forum => "forum",
            ForumKind::Faq => "faq",
            ForumKind::Guide => "guide",
        }
    }
}

impl fmt::Display for ForumKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ForumKind {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forum" => Ok(ForumKind::Forum),
            "faq" => Ok(ForumKind::Faq),
            "guide" => Ok(ForumKind::Guide),
            other => Err(IndexError::ValidationError(format!("unknown forum kind: {other}"))),
        }
    }
}
