use crate::index::enums::index_error::IndexError;
use crate::metainfo::enums::metainfo_error::MetainfoError;
use crate::storage::enums::storage_error::StorageError;

impl IndexError {
    /// HTTP status the variant maps to. Kept as a bare u16 so the error
    /// type stays independent of the web framework.
    pub fn status_code(&self) -> u16 {
        match self {
            IndexError::InvalidTorrentFile(_) => 400,
            IndexError::DuplicateInfoHash => 409,
            IndexError::DuplicateUsername => 409,
            IndexError::DuplicateEmail => 409,
            IndexError::InvalidCredentials => 401,
            IndexError::ValidationError(_) => 400,
            IndexError::InvalidIdentifier(_) => 400,
            IndexError::NotFound(_) => 404,
            IndexError::ThreadLocked => 423,
            IndexError::Unauthorized => 401,
            IndexError::Forbidden => 403,
            IndexError::StorageFailure(_) => 500,
        }
    }
}

impl From<MetainfoError> for IndexError {
    fn from(err: MetainfoError) -> IndexError {
        IndexError::InvalidTorrentFile(err.to_string())
    }
}

impl From<StorageError> for IndexError {
    fn from(err: StorageError) -> IndexError {
        IndexError::StorageFailure(err.to_string())
    }
}
