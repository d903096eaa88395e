/// Avatar image stored inside a user record.
///
/// Served by a dedicated endpoint with the raw bytes and content type;
/// never part of a serialized profile.
#[derive(Clone, Debug)]
pub struct UserAvatar {
    pub data: Vec<u8>,
    pub content_type: String,
}
