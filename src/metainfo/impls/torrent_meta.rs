use bip_bencode::{BDecodeOpt, BRefAccess, BencodeRef};
use sha1::{Digest, Sha1};
use crate::index::structs::info_hash::InfoHash;
use crate::metainfo::enums::metainfo_error::MetainfoError;
use crate::metainfo::structs::meta_file::MetaFile;
use crate::metainfo::structs::torrent_meta::TorrentMeta;

impl TorrentMeta {
    /// Parses raw `.torrent` bytes into structured metadata.
    ///
    /// The info hash is the SHA-1 of the bencoded `info` dictionary as it
    /// appears in the input, so identical files always hash identically.
    pub fn from_bytes(data: &[u8]) -> Result<TorrentMeta, MetainfoError>
    {
        let root = match BencodeRef::decode(data, BDecodeOpt::default()) {
            Ok(root) => root,
            Err(error) => { return Err(MetainfoError::InvalidBencoding(error.to_string())); }
        };
        let root_dict = match root.dict() {
            Some(dict) => dict,
            None => { return Err(MetainfoError::InvalidBencoding("root value is not a dictionary".to_string())); }
        };
        let info = match root_dict.lookup(b"info") {
            Some(info) => info,
            None => { return Err(MetainfoError::MissingField("info".to_string())); }
        };
        let info_dict = match info.dict() {
            Some(dict) => dict,
            None => { return Err(MetainfoError::InvalidField("info".to_string())); }
        };
        let name = match info_dict.lookup(b"name").and_then(|value| value.str()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => { return Err(MetainfoError::MissingField("info.name".to_string())); }
        };

        let files = match info_dict.lookup(b"files") {
            Some(entries) => Self::parse_file_list(entries)?,
            None => {
                let size = match info_dict.lookup(b"length").and_then(|value| value.int()) {
                    Some(length) if length >= 0 => length as u64,
                    Some(_) => { return Err(MetainfoError::InvalidField("info.length".to_string())); }
                    None => { return Err(MetainfoError::MissingField("info.length".to_string())); }
                };
                vec![MetaFile { path: name.clone(), size }]
            }
        };

        let total_size = files.iter().map(|file| file.size).sum();

        let mut hasher = Sha1::new();
        hasher.update(info.buffer());
        let info_hash = InfoHash(<[u8; 20]>::try_from(hasher.finalize().as_slice()).unwrap());

        Ok(TorrentMeta {
            info_hash,
            name,
            total_size,
            files
        })
    }

    fn parse_file_list(entries: &BencodeRef<'_>) -> Result<Vec<MetaFile>, MetainfoError>
    {
        let entry_list = match entries.list() {
            Some(list) => list,
            None => { return Err(MetainfoError::InvalidField("info.files".to_string())); }
        };
        if entry_list.len() == 0 {
            return Err(MetainfoError::InvalidField("info.files".to_string()));
        }
        let mut files = Vec::with_capacity(entry_list.len());
        for position in 0..entry_list.len() {
            let entry_dict = match entry_list.get(position).and_then(|entry| entry.dict()) {
                Some(dict) => dict,
                None => { return Err(MetainfoError::InvalidField("info.files".to_string())); }
            };
            let size = match entry_dict.lookup(b"length").and_then(|value| value.int()) {
                Some(length) if length >= 0 => length as u64,
                _ => { return Err(MetainfoError::InvalidField("info.files.length".to_string())); }
            };
            let segment_list = match entry_dict.lookup(b"path").and_then(|value| value.list()) {
                Some(list) if list.len() > 0 => list,
                _ => { return Err(MetainfoError::InvalidField("info.files.path".to_string())); }
            };
            let mut segments = Vec::with_capacity(segment_list.len());
            for segment_position in 0..segment_list.len() {
                match segment_list.get(segment_position).and_then(|segment| segment.str()) {
                    Some(segment) => { segments.push(segment); }
                    None => { return Err(MetainfoError::InvalidField("info.files.path".to_string())); }
                }
            }
            files.push(MetaFile {
                path: segments.join("/"),
                size
            });
        }
        Ok(files)
    }
}
