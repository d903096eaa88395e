use thiserror::Error;

/// Errors that occur when parsing `.torrent` file bytes.
#[derive(Debug, Error)]
pub enum MetainfoError {
    #[error("Invalid bencoding: {0}")]
    InvalidBencoding(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),
}
