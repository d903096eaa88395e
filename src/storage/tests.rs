#[cfg(test)]
mod storage_tests {
    use std::sync::Arc;
    use tempfile::TempDir;
    use crate::config::structs::configuration::Configuration;
    use crate::storage::enums::blob_kind::BlobKind;
    use crate::storage::structs::blob_storage::BlobStorage;

    fn test_storage() -> (TempDir, BlobStorage) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let mut config = Configuration::init();
        config.storage.uploads_path = temp_dir.path().join("uploads").to_string_lossy().to_string();
        let storage = BlobStorage::new(Arc::new(config));
        storage.init().expect("Failed to initialize blob storage");
        (temp_dir, storage)
    }

    #[test]
    fn test_init_creates_subdirectories() {
        let (_temp_dir, storage) = test_storage();
        assert!(storage.kind_root(BlobKind::Torrents).is_dir());
        assert!(storage.kind_root(BlobKind::Images).is_dir());
    }

    #[test]
    fn test_store_and_read_roundtrip() {
        let (_temp_dir, storage) = test_storage();
        let stored_name = storage.store(BlobKind::Torrents, "ubuntu.torrent", b"torrent bytes").unwrap();
        assert!(stored_name.ends_with("_ubuntu.torrent"));
        assert!(storage.exists(BlobKind::Torrents, &stored_name));
        assert_eq!(storage.read(BlobKind::Torrents, &stored_name).unwrap(), b"torrent bytes");
    }

    #[test]
    fn test_stored_names_never_collide() {
        let (_temp_dir, storage) = test_storage();
        let first = storage.store(BlobKind::Images, "shot.png", b"one").unwrap();
        let second = storage.store(BlobKind::Images, "shot.png", b"two").unwrap();
        assert_ne!(first, second);
        assert_eq!(storage.read(BlobKind::Images, &first).unwrap(), b"one");
        assert_eq!(storage.read(BlobKind::Images, &second).unwrap(), b"two");
    }

    #[test]
    fn test_delete_removes_blob() {
        let (_temp_dir, storage) = test_storage();
        let stored_name = storage.store(BlobKind::Torrents, "gone.torrent", b"bytes").unwrap();
        storage.delete(BlobKind::Torrents, &stored_name).unwrap();
        assert!(!storage.exists(BlobKind::Torrents, &stored_name));
        assert!(storage.read(BlobKind::Torrents, &stored_name).is_err());
    }

    #[test]
    fn test_exists_false_for_missing_blob() {
        let (_temp_dir, storage) = test_storage();
        assert!(!storage.exists(BlobKind::Torrents, "never-stored.torrent"));
    }

    #[test]
    fn test_read_rejects_traversal_names() {
        let (_temp_dir, storage) = test_storage();
        assert!(storage.read(BlobKind::Torrents, "../outside.torrent").is_err());
        assert!(storage.delete(BlobKind::Torrents, "a/b.torrent").is_err());
    }

    #[test]
    fn test_kinds_are_separate_namespaces() {
        let (_temp_dir, storage) = test_storage();
        let stored_name = storage.store(BlobKind::Torrents, "only-here.torrent", b"bytes").unwrap();
        assert!(!storage.exists(BlobKind::Images, &stored_name));
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(BlobStorage::sanitize_name("my file (1).torrent"), "my_file__1_.torrent");
        assert_eq!(BlobStorage::sanitize_name("dir/other.torrent"), "dir_other.torrent");
        assert_eq!(BlobStorage::sanitize_name("back\\slash.png"), "back_slash.png");
    }

    #[test]
    fn test_sanitize_collapses_dot_runs() {
        assert_eq!(BlobStorage::sanitize_name("a..b.torrent"), "a.b.torrent");
        assert_eq!(BlobStorage::sanitize_name("..."), "file");
    }

    #[test]
    fn test_sanitize_floors_empty_names() {
        assert_eq!(BlobStorage::sanitize_name(""), "file");
        assert_eq!(BlobStorage::sanitize_name("___"), "file");
    }

    #[test]
    fn test_sanitize_caps_length() {
        let long_name = "a".repeat(500);
        assert_eq!(BlobStorage::sanitize_name(&long_name).len(), 100);
    }
}
