use thiserror::Error;

/// Errors that occur during blob storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to create storage directory: {0}")]
    CreateDirectory(String),

    #[error("Unable to write file: {0}")]
    WriteFile(String),

    #[error("Unable to read file: {0}")]
    ReadFile(String),

    #[error("Unable to delete file: {0}")]
    DeleteFile(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}
