use std::fmt;
use std::fmt::Formatter;
use crate::index::enums::index_error::IndexError;
use crate::index::enums::torrent_category::TorrentCategory;

impl TorrentCategory {
    pub const ALL: [TorrentCategory; 6] = [
        TorrentCategory::Movies,
        TorrentCategory::TvShows,
        TorrentCategory::Games,
        TorrentCategory::Music,
        TorrentCategory::Applications,
        TorrentCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TorrentCategory::Movies => "Movies",
            TorrentCategory::TvShows => "TV Shows",
            TorrentCategory::Games => "Games",
            TorrentCategory::Music => "Music",
            TorrentCategory::Applications => "Applications",
            TorrentCategory::Other => "Other",
        }
    }
}

impl fmt::Display for TorrentCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TorrentCategory {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movies" => Ok(TorrentCategory::Movies),
            "TV Shows" => Ok(TorrentCategory::TvShows),
            "Games" => Ok(TorrentCategory::Games),
            "Music" => Ok(TorrentCategory::Music),
            "Applications" => Ok(TorrentCategory::Applications),
            "Other" => Ok(TorrentCategory::Other),
            other => Err(IndexError::ValidationError(format!("unknown category: {other}"))),
        }
    }
}
