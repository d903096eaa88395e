//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 digest of the bencoded "info" dictionary in a
/// torrent file. It uniquely identifies the torrent's content and serves as
/// the catalog's de-duplication key: two uploads with the same info hash are
/// the same torrent.
///
/// # Serialization
///
/// The info hash is represented as a 40-character lowercase hexadecimal
/// string in every serialized form (API responses, database rows, URLs).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
