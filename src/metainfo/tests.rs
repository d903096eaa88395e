#[cfg(test)]
mod metainfo_tests {
    use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
    use sha1::{Digest, Sha1};
    use crate::metainfo::enums::metainfo_error::MetainfoError;
    use crate::metainfo::structs::torrent_meta::TorrentMeta;

    fn single_file_torrent(name: &str, length: i64) -> Vec<u8>
    {
        ben_map! {
            "announce" => ben_bytes!("http://tracker.example.com/announce"),
            "info" => ben_map! {
                "length" => ben_int!(length),
                "name" => ben_bytes!(name),
                "piece length" => ben_int!(262144),
                "pieces" => ben_bytes!("aaaaaaaaaaaaaaaaaaaa")
            }
        }.encode()
    }

    fn multi_file_torrent(name: &str) -> Vec<u8>
    {
        ben_map! {
            "announce" => ben_bytes!("http://tracker.example.com/announce"),
            "info" => ben_map! {
                "files" => ben_list!(
                    ben_map! {
                        "length" => ben_int!(111),
                        "path" => ben_list!(ben_bytes!("subdir"), ben_bytes!("first.bin"))
                    },
                    ben_map! {
                        "length" => ben_int!(222),
                        "path" => ben_list!(ben_bytes!("second.bin"))
                    }
                ),
                "name" => ben_bytes!(name),
                "piece length" => ben_int!(262144),
                "pieces" => ben_bytes!("aaaaaaaaaaaaaaaaaaaa")
            }
        }.encode()
    }

    #[test]
    fn test_parse_single_file_layout() {
        let meta = TorrentMeta::from_bytes(&single_file_torrent("ubuntu.iso", 4096)).unwrap();
        assert_eq!(meta.name, "ubuntu.iso");
        assert_eq!(meta.total_size, 4096);
        assert_eq!(meta.files.len(), 1);
        assert_eq!(meta.files[0].path, "ubuntu.iso");
        assert_eq!(meta.files[0].size, 4096);
    }

    #[test]
    fn test_parse_multi_file_layout() {
        let meta = TorrentMeta::from_bytes(&multi_file_torrent("bundle")).unwrap();
        assert_eq!(meta.name, "bundle");
        assert_eq!(meta.total_size, 333);
        assert_eq!(meta.files.len(), 2);
        assert_eq!(meta.files[0].path, "subdir/first.bin");
        assert_eq!(meta.files[0].size, 111);
        assert_eq!(meta.files[1].path, "second.bin");
        assert_eq!(meta.files[1].size, 222);
    }

    #[test]
    fn test_info_hash_matches_reference_digest() {
        let info_encoded = ben_map! {
            "length" => ben_int!(4096),
            "name" => ben_bytes!("ubuntu.iso"),
            "piece length" => ben_int!(262144),
            "pieces" => ben_bytes!("aaaaaaaaaaaaaaaaaaaa")
        }.encode();
        let mut hasher = Sha1::new();
        hasher.update(&info_encoded);
        let expected = <[u8; 20]>::try_from(hasher.finalize().as_slice()).unwrap();

        let meta = TorrentMeta::from_bytes(&single_file_torrent("ubuntu.iso", 4096)).unwrap();
        assert_eq!(meta.info_hash.0, expected);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let bytes = multi_file_torrent("bundle");
        let first = TorrentMeta::from_bytes(&bytes).unwrap();
        let second = TorrentMeta::from_bytes(&bytes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_names_hash_differently() {
        let first = TorrentMeta::from_bytes(&single_file_torrent("one.iso", 4096)).unwrap();
        let second = TorrentMeta::from_bytes(&single_file_torrent("two.iso", 4096)).unwrap();
        assert_ne!(first.info_hash, second.info_hash);
    }

    #[test]
    fn test_rejects_garbage_bytes() {
        let result = TorrentMeta::from_bytes(b"definitely not bencoding");
        assert!(matches!(result, Err(MetainfoError::InvalidBencoding(_))));
    }

    #[test]
    fn test_rejects_non_dictionary_root() {
        let bytes = ben_int!(42).encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::InvalidBencoding(_))));
    }

    #[test]
    fn test_rejects_missing_info() {
        let bytes = ben_map! {
            "announce" => ben_bytes!("http://tracker.example.com/announce")
        }.encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::MissingField(field)) if field == "info"));
    }

    #[test]
    fn test_rejects_missing_name() {
        let bytes = ben_map! {
            "info" => ben_map! {
                "length" => ben_int!(4096)
            }
        }.encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::MissingField(field)) if field == "info.name"));
    }

    #[test]
    fn test_rejects_missing_length_in_single_file() {
        let bytes = ben_map! {
            "info" => ben_map! {
                "name" => ben_bytes!("orphan.bin")
            }
        }.encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::MissingField(field)) if field == "info.length"));
    }

    #[test]
    fn test_rejects_negative_length() {
        let bytes = ben_map! {
            "info" => ben_map! {
                "length" => ben_int!(-1),
                "name" => ben_bytes!("negative.bin")
            }
        }.encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::InvalidField(_))));
    }

    #[test]
    fn test_rejects_empty_file_list() {
        let bytes = ben_map! {
            "info" => ben_map! {
                "files" => ben_list!(),
                "name" => ben_bytes!("empty")
            }
        }.encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::InvalidField(_))));
    }

    #[test]
    fn test_rejects_file_entry_without_path() {
        let bytes = ben_map! {
            "info" => ben_map! {
                "files" => ben_list!(
                    ben_map! {
                        "length" => ben_int!(111)
                    }
                ),
                "name" => ben_bytes!("broken")
            }
        }.encode();
        let result = TorrentMeta::from_bytes(&bytes);
        assert!(matches!(result, Err(MetainfoError::InvalidField(_))));
    }
}
