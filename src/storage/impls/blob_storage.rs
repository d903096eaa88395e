use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use log::info;
use uuid::Uuid;
use crate::config::structs::configuration::Configuration;
use crate::security::security::validate_file_path;
use crate::storage::enums::blob_kind::BlobKind;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::blob_storage::BlobStorage;

const MAX_ORIGINAL_NAME_LENGTH: usize = 100;

impl BlobStorage {
    pub fn new(config: Arc<Configuration>) -> BlobStorage
    {
        BlobStorage {
            config
        }
    }

    /// Creates the uploads root and one subdirectory per blob kind.
    pub fn init(&self) -> Result<(), StorageError>
    {
        for directory in [
            PathBuf::from(&self.config.storage.uploads_path),
            self.kind_root(BlobKind::Torrents),
            self.kind_root(BlobKind::Images),
            PathBuf::from(&self.config.storage.uploads_path).join("avatars"),
        ] {
            if let Err(error) = fs::create_dir_all(&directory) {
                return Err(StorageError::CreateDirectory(format!("{}: {}", directory.display(), error)));
            }
        }
        info!("[STORAGE] Uploads root ready at {}", self.config.storage.uploads_path);
        Ok(())
    }

    /// Writes a blob under a fresh UUID-prefixed name and returns that name.
    pub fn store(&self, kind: BlobKind, original_name: &str, data: &[u8]) -> Result<String, StorageError>
    {
        let stored_name = format!("{}_{}", Uuid::new_v4(), Self::sanitize_name(original_name));
        let path = self.kind_root(kind).join(&stored_name);
        match fs::write(&path, data) {
            Ok(()) => Ok(stored_name),
            Err(error) => Err(StorageError::WriteFile(format!("{}: {}", path.display(), error)))
        }
    }

    pub fn read(&self, kind: BlobKind, stored_name: &str) -> Result<Vec<u8>, StorageError>
    {
        let path = self.blob_path(kind, stored_name)?;
        fs::read(&path).map_err(|error| StorageError::ReadFile(format!("{}: {}", path.display(), error)))
    }

    pub fn exists(&self, kind: BlobKind, stored_name: &str) -> bool
    {
        match self.blob_path(kind, stored_name) {
            Ok(path) => path.is_file(),
            Err(_) => false
        }
    }

    pub fn delete(&self, kind: BlobKind, stored_name: &str) -> Result<(), StorageError>
    {
        let path = self.blob_path(kind, stored_name)?;
        fs::remove_file(&path).map_err(|error| StorageError::DeleteFile(format!("{}: {}", path.display(), error)))
    }

    /// Reads the configured default avatar fallback.
    pub fn default_avatar(&self) -> Result<Vec<u8>, StorageError>
    {
        let path = &self.config.storage.default_avatar;
        fs::read(path).map_err(|error| StorageError::ReadFile(format!("{}: {}", path, error)))
    }

    pub fn kind_root(&self, kind: BlobKind) -> PathBuf
    {
        let subdir = match kind {
            BlobKind::Torrents => &self.config.storage.torrents_dir,
            BlobKind::Images => &self.config.storage.images_dir,
        };
        PathBuf::from(&self.config.storage.uploads_path).join(subdir)
    }

    fn blob_path(&self, kind: BlobKind, stored_name: &str) -> Result<PathBuf, StorageError>
    {
        if let Err(error) = validate_file_path(stored_name) {
            return Err(StorageError::InvalidFileName(error.message));
        }
        if stored_name.contains('/') || stored_name.contains('\\') {
            return Err(StorageError::InvalidFileName(stored_name.to_string()));
        }
        Ok(self.kind_root(kind).join(stored_name))
    }

    /// Reduces an uploaded name to `[A-Za-z0-9._-]`, capping its length.
    /// Consecutive dots collapse so stored names never contain `..`.
    pub fn sanitize_name(original_name: &str) -> String
    {
        let mut cleaned = String::with_capacity(original_name.len().min(MAX_ORIGINAL_NAME_LENGTH));
        for character in original_name.chars().take(MAX_ORIGINAL_NAME_LENGTH) {
            let mapped = if character.is_ascii_alphanumeric() || character == '.' || character == '_' || character == '-' {
                character
            } else {
                '_'
            };
            if mapped == '.' && cleaned.ends_with('.') {
                continue;
            }
            cleaned.push(mapped);
        }
        if cleaned.trim_matches(|character: char| character == '.' || character == '_').is_empty() {
            return String::from("file");
        }
        cleaned
    }
}
