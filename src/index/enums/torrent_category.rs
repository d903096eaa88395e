use serde::{Deserialize, Serialize};

/// The fixed set of categories a catalog entry is filed under.
///
/// Categories are matched and serialized by their display names, including
/// the space in "TV Shows". Anything outside this set is rejected at the
/// edge as a validation error.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum TorrentCategory {
    Movies,
    #[serde(rename = "TV Shows")]
    TvShows,
    Games,
    Music,
    Applications,
    Other,
}
