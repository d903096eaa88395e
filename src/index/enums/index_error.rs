use thiserror::Error;

/// Errors produced by index operations.
///
/// Every fallible operation on the index funnels its failures into this
/// taxonomy; handlers translate variants to HTTP responses via
/// [`IndexError::status_code`] and the `Display` message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("invalid torrent file: {0}")]
    InvalidTorrentFile(String),

    #[error("this torrent has already been uploaded")]
    DuplicateInfoHash,

    #[error("this username is already taken")]
    DuplicateUsername,

    #[error("an account with this email already exists")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    ValidationError(String),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("this thread is locked")]
    ThreadLocked,

    #[error("authentication required")]
    Unauthorized,

    #[error("insufficient permissions")]
    Forbidden,

    #[error("storage failure: {0}")]
    StorageFailure(String),
}
